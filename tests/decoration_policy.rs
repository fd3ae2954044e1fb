//! The process-wide decoration default.
//!
//! Everything lives in one test so nothing else in this binary observes the
//! flag while it is being toggled.

use errm::prelude::*;
use errm::{disable_decoration, enable_decoration};

#[derive(Debug, PartialEq)]
struct NotFound(&'static str);

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} not found", self.0)
    }
}

impl std::error::Error for NotFound {}

fn lookup(key: &'static str) -> Result<u32, NotFound> {
    Err(NotFound(key))
}

#[test]
fn test_decoration_toggle() {
    assert_eq!(Decoration::current(), Decoration::Enabled);

    let step = wrap(lookup);
    let named = wrap_named("lookup_user", lookup);

    // Enabled by default: name and input prefix the original message.
    let (value, error) = step("alice").unpack();
    assert_eq!(value, 0);
    let error = error.expect("lookup always fails");
    assert!(error.is_decorated());
    assert_eq!(error.inner(), &NotFound("alice"));
    let text = error.to_string();
    assert!(text.contains("lookup"));
    assert!(text.contains("\"alice\""));
    assert!(text.ends_with(": alice not found"));

    let error = named("bob").unpack().1.expect("lookup always fails");
    assert_eq!(error.to_string(), "lookup_user(\"bob\"): bob not found");

    // Disabled: the error displays exactly as the original.
    disable_decoration();
    assert_eq!(Decoration::current(), Decoration::Disabled);

    let error = step("alice").unpack().1.expect("lookup always fails");
    assert!(!error.is_decorated());
    assert_eq!(error.to_string(), NotFound("alice").to_string());
    assert_eq!(error.into_inner(), NotFound("alice"));

    let error = named("bob").unpack().1.expect("lookup always fails");
    assert_eq!(error.to_string(), "bob not found");

    // An explicit choice ignores the default.
    let explicit = wrap_with(Decoration::Enabled, "lookup", lookup);
    let error = explicit("carol").unpack().1.expect("lookup always fails");
    assert_eq!(error.to_string(), "lookup(\"carol\"): carol not found");

    // Re-enabling applies to adapters created while disabled.
    enable_decoration();
    let error = step("dave").unpack().1.expect("lookup always fails");
    assert!(error.is_decorated());

    disable_decoration();
    let quiet = wrap_with(Decoration::current(), "lookup", lookup);
    enable_decoration();
    let error = quiet("erin").unpack().1.expect("lookup always fails");
    assert_eq!(error.to_string(), "erin not found");
}
