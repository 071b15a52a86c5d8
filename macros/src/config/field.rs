//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{
    extract_doc_comment, get_custom_name, get_default_value, has_attr, parse_field_status,
};

// Re-export FieldStatus for convenience
pub use crate::config::attr::FieldStatus;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    /// Doc lines rendered as `#` comments above the field.
    pub doc: Option<String>,
    /// Doc rendered inline after the value (with `#[config(inline_doc)]`).
    pub inline_doc: Option<String>,
    pub status: FieldStatus,
    pub default: Option<String>,
    pub skip: bool,
    pub hidden: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        let doc = extract_doc_comment(attrs);
        // inline_doc moves the doc comment after the value; only the first
        // line is used there to keep the template line readable.
        let (doc, inline_doc) = if has_attr(attrs, "inline_doc") {
            let inline = doc.map(|d| d.lines().next().unwrap_or_default().trim().to_string());
            (None, inline)
        } else {
            (doc, None)
        };

        Some(Self {
            name: ident.clone(),
            toml_name: get_custom_name(attrs).unwrap_or_else(|| ident.to_string()),
            doc,
            inline_doc,
            status: parse_field_status(attrs),
            default: get_default_value(attrs),
            skip: has_attr(attrs, "skip"),
            hidden: has_attr(attrs, "hidden"),
            sub: has_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }
}
