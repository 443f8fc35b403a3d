// std::borrow::Cow
// std::option::Option

/// This macro extracts owned value from cow
/// but if cow is borrowed it returns default given value
///
/// Helpful with string helpers returning `Cow<'_, str>`: `Cow::Borrowed`
/// marks that the input was not modified, so the original owned `String`
/// can be kept instead of copying the borrowed slice.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
