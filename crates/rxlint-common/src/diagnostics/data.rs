use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const UNSAFE_OPTIONAL_NEXT_CALLS_ARE_FORBIDDEN: u32 = 1001;
    pub const SUBJECT_IDENTIFIERS_MUST_END_WITH: u32 = 1002;
}

pub mod diagnostic_messages {
    pub const UNSAFE_OPTIONAL_NEXT_CALLS_ARE_FORBIDDEN: &str =
        "Unsafe optional next calls are forbidden.";
    pub const SUBJECT_IDENTIFIERS_MUST_END_WITH: &str = "Subject identifiers must end with \"{0}\".";
}

/// Message definitions by rule, for reporting sites.
pub mod rule_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages};

    pub const NO_UNSAFE_SUBJECT_NEXT_FORBIDDEN: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNSAFE_OPTIONAL_NEXT_CALLS_ARE_FORBIDDEN,
        category: DiagnosticCategory::Error,
        rule: "no-unsafe-subject-next",
        message_id: "forbidden",
        message: diagnostic_messages::UNSAFE_OPTIONAL_NEXT_CALLS_ARE_FORBIDDEN,
        params: &[],
    };

    pub const SUFFIX_SUBJECTS_FORBIDDEN: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::SUBJECT_IDENTIFIERS_MUST_END_WITH,
        category: DiagnosticCategory::Error,
        rule: "suffix-subjects",
        message_id: "forbidden",
        message: diagnostic_messages::SUBJECT_IDENTIFIERS_MUST_END_WITH,
        params: &["suffix"],
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    rule_messages::NO_UNSAFE_SUBJECT_NEXT_FORBIDDEN,
    rule_messages::SUFFIX_SUBJECTS_FORBIDDEN,
];
