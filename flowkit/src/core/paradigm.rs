//! Paradigm-specific rendering of flow fragments.
//!
//! Rendering is total: a fragment and *any* paradigm name produce a string.
//! Known paradigms get their fixed template; everything else falls through to
//! a comment-wrapped form that keeps both the name and the fragment intact.

use std::fmt;

/// A target (or source) programming paradigm.
///
/// Known names match case-sensitively and exactly; anything else is carried
/// verbatim in [`Paradigm::Other`] so rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paradigm {
    Imperative,
    Functional,
    Logic,
    Declarative,
    Concatenative,
    Array,
    Stack,
    Dataflow,
    Reactive,
    Concurrent,
    Quantum,
    Other(String),
}

impl Paradigm {
    /// All paradigms with a dedicated template, in table order.
    pub const KNOWN: [Paradigm; 11] = [
        Paradigm::Imperative,
        Paradigm::Functional,
        Paradigm::Logic,
        Paradigm::Declarative,
        Paradigm::Concatenative,
        Paradigm::Array,
        Paradigm::Stack,
        Paradigm::Dataflow,
        Paradigm::Reactive,
        Paradigm::Concurrent,
        Paradigm::Quantum,
    ];

    pub fn name(&self) -> &str {
        match self {
            Paradigm::Imperative => "imperative",
            Paradigm::Functional => "functional",
            Paradigm::Logic => "logic",
            Paradigm::Declarative => "declarative",
            Paradigm::Concatenative => "concatenative",
            Paradigm::Array => "array",
            Paradigm::Stack => "stack",
            Paradigm::Dataflow => "dataflow",
            Paradigm::Reactive => "reactive",
            Paradigm::Concurrent => "concurrent",
            Paradigm::Quantum => "quantum",
            Paradigm::Other(name) => name,
        }
    }

    /// Wrap a flow fragment in this paradigm's surface syntax.
    ///
    /// The fragment is substituted verbatim: no escaping, no validation.
    pub fn render(&self, code: &str) -> String {
        match self {
            Paradigm::Imperative => format!("do {{ {code} }}"),
            Paradigm::Functional => format!("(λ {code})"),
            Paradigm::Logic => format!("{code} :-"),
            Paradigm::Declarative => format!("<{code}/>"),
            Paradigm::Concatenative => format!("{code} ."),
            Paradigm::Array => format!("[{code}]"),
            Paradigm::Stack => format!("push {code}"),
            Paradigm::Dataflow => format!("{code} |>"),
            Paradigm::Reactive => format!("observe({code})"),
            Paradigm::Concurrent => format!("go {{ {code} }}"),
            Paradigm::Quantum => format!("|{code}⟩"),
            Paradigm::Other(name) => format!("/* {name} */ {code}"),
        }
    }
}

impl From<&str> for Paradigm {
    fn from(name: &str) -> Self {
        match name {
            "imperative" => Paradigm::Imperative,
            "functional" => Paradigm::Functional,
            "logic" => Paradigm::Logic,
            "declarative" => Paradigm::Declarative,
            "concatenative" => Paradigm::Concatenative,
            "array" => Paradigm::Array,
            "stack" => Paradigm::Stack,
            "dataflow" => Paradigm::Dataflow,
            "reactive" => Paradigm::Reactive,
            "concurrent" => Paradigm::Concurrent,
            "quantum" => Paradigm::Quantum,
            other => Paradigm::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a flow fragment into the paradigm named by `paradigm`.
pub fn render(code: &str, paradigm: &str) -> String {
    Paradigm::from(paradigm).render(code)
}

/// Reduce paradigm-specific code back to flow by stripping `;`, `{`, `}`.
///
/// The source paradigm is accepted for symmetry with [`render`] but does not
/// affect the result: reduction to flow is uniform across paradigms.
pub fn to_flow(code: &str, _source: &Paradigm) -> String {
    code.chars().filter(|c| !matches!(c, ';' | '{' | '}')).collect()
}
