use thiserror::Error;

/// Rejection of a single field edit. The field keeps its previous value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("too long (max {max} characters)")]
    TooLong { max: usize },

    #[error("{field}: '{ch}' is not allowed")]
    InvalidCharacter { field: &'static str, ch: char },

    #[error("{field}: an entry cannot start with '-'")]
    LeadingDash { field: &'static str },

    #[error("{field}: operation not supported by this field")]
    WrongKind { field: &'static str },
}

/// Cross-field rule violated at submit time. Blocks submission only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationConflictError {
    #[error("--resume cannot be combined with other options")]
    ResumeWithOtherOptions,

    #[error("no targets specified")]
    NoTargets,

    #[error("list scan (-sL) and ping scan (-sn) are mutually exclusive")]
    ListAndPingScan,

    #[error("{mode} disables port scanning and cannot be combined with {option}")]
    PortOptionWithoutPortScan {
        mode: &'static str,
        option: &'static str,
    },

    #[error("list scan (-sL) sends no probes and cannot be combined with {option}")]
    ProbeOptionWithListScan { option: &'static str },

    #[error("fast mode (-F) cannot be combined with an explicit port list (-p)")]
    FastModeWithPorts,

    #[error("OS detection (-O) requires a TCP scan technique")]
    OsDetectionWithUdp,

    #[error("{option} requires OS detection (-O)")]
    OsOptionWithoutOsDetection { option: &'static str },

    #[error("{flag} needs an output file (use - for stdout)")]
    MissingOutputFile { flag: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long_message() {
        let err = ValidationError::TooLong { max: 64 };
        assert!(err.to_string().starts_with("too long"));
    }

    #[test]
    fn test_conflict_messages_are_specific() {
        let err = ConfigurationConflictError::PortOptionWithoutPortScan {
            mode: "ping scan (-sn)",
            option: "version detection (-sV)",
        };
        assert_eq!(
            err.to_string(),
            "ping scan (-sn) disables port scanning and cannot be combined with version detection (-sV)"
        );
    }
}
