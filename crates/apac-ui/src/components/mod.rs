//! Reusable UI primitives.

mod badge;
mod button;
mod card;

pub use badge::*;
pub use button::*;
pub use card::*;

/// Append an optional extra class to a base class.
pub(crate) fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_class_joined() {
        assert_eq!(with_extra("card", Some("h-full")), "card h-full");
        assert_eq!(with_extra("card", Some("")), "card");
        assert_eq!(with_extra("card", None), "card");
    }
}
