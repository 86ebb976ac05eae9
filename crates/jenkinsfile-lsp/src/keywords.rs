//! Documentation table for declarative pipeline keywords.

use std::collections::HashMap;
use std::sync::LazyLock;

/// What the Jenkins pipeline syntax reference says about a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Whether the block must appear, e.g. "Yes" or "At least one".
    pub required: &'static str,
    /// Accepted parameters, or a link to where they are documented.
    pub parameters: &'static str,
    /// Where in the pipeline the block may be placed.
    pub allowed: &'static str,
}

const TOP_LEVEL_AND_STAGE: &str = "In the top-level pipeline block and each stage block.";
const ONCE_IN_PIPELINE: &str = "Only once, inside the pipeline block.";

static KEYWORDS: LazyLock<HashMap<&'static str, KeywordEntry>> = LazyLock::new(|| {
    let entry = |required, parameters, allowed| KeywordEntry {
        required,
        parameters,
        allowed,
    };

    HashMap::from([
        (
            "agent",
            entry(
                "Yes",
                "https://jenkins.io/doc/book/pipeline/syntax/#agent-parameters",
                TOP_LEVEL_AND_STAGE,
            ),
        ),
        ("post", entry("No", "None", TOP_LEVEL_AND_STAGE)),
        ("stages", entry("Yes", "None", ONCE_IN_PIPELINE)),
        ("steps", entry("Yes", "None", "Inside each stage block.")),
        (
            "environment",
            entry(
                "No",
                "None",
                "Inside the pipeline block, or within stage directives.",
            ),
        ),
        ("options", entry("No", "None", ONCE_IN_PIPELINE)),
        ("parameters", entry("No", "None", ONCE_IN_PIPELINE)),
        ("triggers", entry("No", "None", ONCE_IN_PIPELINE)),
        (
            "stage",
            entry(
                "At least one",
                "One mandatory parameter, a string for the name of the stage.",
                "Inside the stages section.",
            ),
        ),
        (
            "tools",
            entry("No", "None", "Inside the pipeline block or a stage block."),
        ),
        ("when", entry("No", "None", "Inside a stage directive")),
    ])
});

/// Look up a keyword by its exact, case-sensitive spelling.
pub fn lookup(name: &str) -> Option<&'static KeywordEntry> {
    KEYWORDS.get(name)
}

/// All known keyword names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = KEYWORDS.keys().copied().collect();
    names.sort_unstable();
    names
}
