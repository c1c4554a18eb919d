mod has_fields;
