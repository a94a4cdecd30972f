//! Built-in qualifier axes for pointer-to-member-function types.

use crate::qualifiers::QualifierAxis;

/// cv-qualifiers of the implicit object parameter
pub const CV_QUALIFIERS: &[&str] = &["", "const", "volatile", "const volatile"];

/// Reference qualifiers (lvalue / rvalue receiver)
pub const REF_QUALIFIERS: &[&str] = &["", "&", "&&"];

/// No-throw annotation
pub const NOEXCEPT_QUALIFIERS: &[&str] = &["", "noexcept"];

/// The three axes in declarator order: cv, ref, noexcept.
pub fn builtin_axes() -> Vec<QualifierAxis> {
    vec![
        QualifierAxis::new("cv", CV_QUALIFIERS.iter().copied()),
        QualifierAxis::new("ref", REF_QUALIFIERS.iter().copied()),
        QualifierAxis::new("noexcept", NOEXCEPT_QUALIFIERS.iter().copied()),
    ]
}
