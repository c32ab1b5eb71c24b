//! Rule sets for the user resource.

use super::{FieldRule, Format, ObjectSchema};

/// Path parameters for the id-taking endpoints (show, update, delete).
pub const PARAMS: ObjectSchema = ObjectSchema {
    location: "params",
    additional_properties: true,
    fields: &[FieldRule {
        name: "id",
        required: true,
        format: Some(Format::Uuid),
        min_length: None,
    }],
};

/// Create body: closed field set, everything required.
pub const CREATE_BODY: ObjectSchema = ObjectSchema {
    location: "body",
    additional_properties: false,
    fields: &[
        FieldRule {
            name: "name",
            required: true,
            format: None,
            min_length: None,
        },
        FieldRule {
            name: "email",
            required: true,
            format: Some(Format::Email),
            min_length: None,
        },
        FieldRule {
            name: "password",
            required: true,
            format: None,
            min_length: Some(8),
        },
    ],
};

/// Update body: same field rules as create, nothing required.
pub const UPDATE_BODY: ObjectSchema = ObjectSchema {
    location: "body",
    additional_properties: false,
    fields: &[
        FieldRule {
            name: "name",
            required: false,
            format: None,
            min_length: None,
        },
        FieldRule {
            name: "email",
            required: false,
            format: Some(Format::Email),
            min_length: None,
        },
        FieldRule {
            name: "password",
            required: false,
            format: None,
            min_length: Some(8),
        },
    ],
};
