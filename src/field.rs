use crate::error::ValidationError;
use crate::types::{
    ScanConfiguration, MAX_DEBUG_LEVEL, MAX_VERBOSITY_LEVEL, MAX_VERSION_INTENSITY,
};
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_TEXT_LENGTH: usize = 64;

/// Identifies which part of the configuration a field edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Hostnames,
    ExcludedHostnames,
    Ports,
    ExcludedPorts,
    FastMode,
    ListScanOnly,
    PingScanOnly,
    Traceroute,
    SkipHostDiscovery,
    ScanTechnique,
    VersionDetection,
    VersionIntensity,
    OsDetection,
    OsScanLimit,
    OsScanGuess,
    OutputFormat,
    OutputFile,
    VerbosityLevel,
    DebugLevel,
    ShowReasonPortState,
    OpenPortsOnly,
    ResumeFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text(TextRule),
    Toggle,
    Choice,
    Counter { min: u8, max: u8 },
}

/// Characters a text field accepts. Whitespace and shell metacharacters are
/// rejected at edit time so every value is safe as a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
    Hosts,
    Ports,
    Path,
}

impl TextRule {
    fn pattern(&self) -> &'static Regex {
        static HOSTS_RE: OnceLock<Regex> = OnceLock::new();
        static PORTS_RE: OnceLock<Regex> = OnceLock::new();
        static PATH_RE: OnceLock<Regex> = OnceLock::new();

        match self {
            TextRule::Hosts => HOSTS_RE
                .get_or_init(|| Regex::new(r"^[A-Za-z0-9.:/,*_\-]$").expect("valid hosts regex")),
            TextRule::Ports => PORTS_RE
                .get_or_init(|| Regex::new(r"^[A-Za-z0-9,:*\[\]\-]$").expect("valid ports regex")),
            TextRule::Path => PATH_RE
                .get_or_init(|| Regex::new(r"^[A-Za-z0-9._/~+\-]$").expect("valid path regex")),
        }
    }

    /// First character of `raw` this rule rejects
    pub fn first_invalid(&self, raw: &str) -> Option<char> {
        let pattern = self.pattern();
        let mut buf = [0u8; 4];
        raw.chars().find(|ch| !pattern.is_match(ch.encode_utf8(&mut buf)))
    }
}

/// A single editable unit of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(id: FieldId) -> Self {
        let (label, placeholder, kind) = match id {
            FieldId::Hostnames => ("Targets", "Hostnames to scan", FieldKind::Text(TextRule::Hosts)),
            FieldId::ExcludedHostnames => {
                ("Exclude hosts", "Hostnames to exclude", FieldKind::Text(TextRule::Hosts))
            }
            FieldId::Ports => ("Ports", "Ports to scan", FieldKind::Text(TextRule::Ports)),
            FieldId::ExcludedPorts => {
                ("Exclude ports", "Ports to exclude", FieldKind::Text(TextRule::Ports))
            }
            FieldId::FastMode => ("Fast mode (-F)", "", FieldKind::Toggle),
            FieldId::ListScanOnly => ("List scan (-sL)", "", FieldKind::Toggle),
            FieldId::PingScanOnly => ("Ping scan (-sn)", "", FieldKind::Toggle),
            FieldId::Traceroute => ("Traceroute", "", FieldKind::Toggle),
            FieldId::SkipHostDiscovery => ("Skip host discovery (-Pn)", "", FieldKind::Toggle),
            FieldId::ScanTechnique => ("Technique", "", FieldKind::Choice),
            FieldId::VersionDetection => ("Version detection (-sV)", "", FieldKind::Toggle),
            FieldId::VersionIntensity => (
                "Version intensity",
                "",
                FieldKind::Counter { min: 0, max: MAX_VERSION_INTENSITY },
            ),
            FieldId::OsDetection => ("OS detection (-O)", "", FieldKind::Toggle),
            FieldId::OsScanLimit => ("Limit to promising targets", "", FieldKind::Toggle),
            FieldId::OsScanGuess => ("Guess aggressively", "", FieldKind::Toggle),
            FieldId::OutputFormat => ("Output format", "", FieldKind::Choice),
            FieldId::OutputFile => {
                ("Output file", "File to save the output", FieldKind::Text(TextRule::Path))
            }
            FieldId::VerbosityLevel => (
                "Verbosity",
                "",
                FieldKind::Counter { min: 0, max: MAX_VERBOSITY_LEVEL },
            ),
            FieldId::DebugLevel => {
                ("Debugging", "", FieldKind::Counter { min: 0, max: MAX_DEBUG_LEVEL })
            }
            FieldId::ShowReasonPortState => ("Show port state reason", "", FieldKind::Toggle),
            FieldId::OpenPortsOnly => ("Only open ports", "", FieldKind::Toggle),
            FieldId::ResumeFile => {
                ("Resume", "Log of an aborted scan", FieldKind::Text(TextRule::Path))
            }
        };

        Self { id, label, placeholder, kind }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text(_))
    }

    fn text<'a>(&self, config: &'a ScanConfiguration) -> Option<&'a String> {
        match self.id {
            FieldId::Hostnames => Some(&config.hostnames),
            FieldId::ExcludedHostnames => Some(&config.excluded_hostnames),
            FieldId::Ports => Some(&config.ports),
            FieldId::ExcludedPorts => Some(&config.excluded_ports),
            FieldId::OutputFile => Some(&config.output_file),
            FieldId::ResumeFile => Some(&config.resume_file),
            _ => None,
        }
    }

    fn text_mut<'a>(&self, config: &'a mut ScanConfiguration) -> Option<&'a mut String> {
        match self.id {
            FieldId::Hostnames => Some(&mut config.hostnames),
            FieldId::ExcludedHostnames => Some(&mut config.excluded_hostnames),
            FieldId::Ports => Some(&mut config.ports),
            FieldId::ExcludedPorts => Some(&mut config.excluded_ports),
            FieldId::OutputFile => Some(&mut config.output_file),
            FieldId::ResumeFile => Some(&mut config.resume_file),
            _ => None,
        }
    }

    fn flag_mut<'a>(&self, config: &'a mut ScanConfiguration) -> Option<&'a mut bool> {
        match self.id {
            FieldId::FastMode => Some(&mut config.fast_mode),
            FieldId::ListScanOnly => Some(&mut config.list_scan_only),
            FieldId::PingScanOnly => Some(&mut config.ping_scan_only),
            FieldId::Traceroute => Some(&mut config.traceroute),
            FieldId::SkipHostDiscovery => Some(&mut config.skip_host_discovery),
            FieldId::VersionDetection => Some(&mut config.version_detection),
            FieldId::OsDetection => Some(&mut config.os_detection),
            FieldId::OsScanLimit => Some(&mut config.os_scan_limit),
            FieldId::OsScanGuess => Some(&mut config.os_scan_guess),
            FieldId::ShowReasonPortState => Some(&mut config.show_reason_port_state),
            FieldId::OpenPortsOnly => Some(&mut config.open_ports_only),
            _ => None,
        }
    }

    fn flag(&self, config: &ScanConfiguration) -> Option<bool> {
        match self.id {
            FieldId::FastMode => Some(config.fast_mode),
            FieldId::ListScanOnly => Some(config.list_scan_only),
            FieldId::PingScanOnly => Some(config.ping_scan_only),
            FieldId::Traceroute => Some(config.traceroute),
            FieldId::SkipHostDiscovery => Some(config.skip_host_discovery),
            FieldId::VersionDetection => Some(config.version_detection),
            FieldId::OsDetection => Some(config.os_detection),
            FieldId::OsScanLimit => Some(config.os_scan_limit),
            FieldId::OsScanGuess => Some(config.os_scan_guess),
            FieldId::ShowReasonPortState => Some(config.show_reason_port_state),
            FieldId::OpenPortsOnly => Some(config.open_ports_only),
            _ => None,
        }
    }

    fn counter(&self, config: &ScanConfiguration) -> Option<u8> {
        match self.id {
            FieldId::VersionIntensity => Some(config.version_intensity),
            FieldId::VerbosityLevel => Some(config.verbosity_level),
            FieldId::DebugLevel => Some(config.debug_level),
            _ => None,
        }
    }

    fn counter_mut<'a>(&self, config: &'a mut ScanConfiguration) -> Option<&'a mut u8> {
        match self.id {
            FieldId::VersionIntensity => Some(&mut config.version_intensity),
            FieldId::VerbosityLevel => Some(&mut config.verbosity_level),
            FieldId::DebugLevel => Some(&mut config.debug_level),
            _ => None,
        }
    }

    fn wrong_kind(&self) -> ValidationError {
        log::debug!("[field] wrong_kind: field={:?} kind={:?}", self.id, self.kind);
        ValidationError::WrongKind { field: self.label }
    }

    /// Replace the value of a text field. Rejected edits leave it untouched.
    pub fn set_value(&self, config: &mut ScanConfiguration, raw: &str) -> Result<(), ValidationError> {
        let FieldKind::Text(rule) = self.kind else {
            return Err(self.wrong_kind());
        };

        let length = raw.chars().count();
        if length > MAX_TEXT_LENGTH {
            log::debug!("[field] set_value_rejected: field={:?} length={} max={}",
                self.id, length, MAX_TEXT_LENGTH);
            return Err(ValidationError::TooLong { max: MAX_TEXT_LENGTH });
        }

        if let Some(ch) = rule.first_invalid(raw) {
            log::debug!("[field] set_value_rejected: field={:?} invalid_char={:?}", self.id, ch);
            return Err(ValidationError::InvalidCharacter { field: self.label, ch });
        }

        // targets are bare tokens, so an entry starting with '-' would be read as a flag
        if self.id == FieldId::Hostnames
            && raw.split(',').any(|entry| entry.trim_start().starts_with('-'))
        {
            log::debug!("[field] set_value_rejected: field={:?} leading_dash=true", self.id);
            return Err(ValidationError::LeadingDash { field: self.label });
        }

        let slot = self.text_mut(config).ok_or_else(|| self.wrong_kind())?;
        *slot = raw.to_string();
        log::trace!("[field] set_value: field={:?} value={}", self.id, raw);
        Ok(())
    }

    /// Append one character to a text field
    pub fn push_char(&self, config: &mut ScanConfiguration, ch: char) -> Result<(), ValidationError> {
        let mut candidate = self.text(config).ok_or_else(|| self.wrong_kind())?.clone();
        candidate.push(ch);
        self.set_value(config, &candidate)
    }

    /// Remove the last character of a text field; a no-op when empty
    pub fn pop_char(&self, config: &mut ScanConfiguration) -> Result<(), ValidationError> {
        let mut candidate = self.text(config).ok_or_else(|| self.wrong_kind())?.clone();
        candidate.pop();
        self.set_value(config, &candidate)
    }

    /// Flip a boolean field
    pub fn toggle(&self, config: &mut ScanConfiguration) -> Result<(), ValidationError> {
        let value = self.flag_mut(config).ok_or_else(|| self.wrong_kind())?;
        *value = !*value;
        log::debug!("[field] toggle: field={:?} value={}", self.id, *value);
        Ok(())
    }

    /// Move an enumerated field to its next variant, wrapping after the last
    pub fn advance(&self, config: &mut ScanConfiguration) -> Result<(), ValidationError> {
        match self.id {
            FieldId::ScanTechnique => {
                config.scan_technique = config.scan_technique.next();
                log::debug!("[field] advance: field={:?} value={:?}", self.id, config.scan_technique);
                Ok(())
            }
            FieldId::OutputFormat => {
                config.output_format = config.output_format.next();
                log::debug!("[field] advance: field={:?} value={:?}", self.id, config.output_format);
                Ok(())
            }
            _ => Err(self.wrong_kind()),
        }
    }

    /// Raise a counter by one, staying put at the upper bound
    pub fn increment(&self, config: &mut ScanConfiguration) -> Result<(), ValidationError> {
        let FieldKind::Counter { max, .. } = self.kind else {
            return Err(self.wrong_kind());
        };
        let value = self.counter_mut(config).ok_or_else(|| self.wrong_kind())?;
        *value = value.saturating_add(1).min(max);
        log::debug!("[field] increment: field={:?} value={}", self.id, *value);
        Ok(())
    }

    /// Lower a counter by one, staying put at the lower bound
    pub fn decrement(&self, config: &mut ScanConfiguration) -> Result<(), ValidationError> {
        let FieldKind::Counter { min, .. } = self.kind else {
            return Err(self.wrong_kind());
        };
        let value = self.counter_mut(config).ok_or_else(|| self.wrong_kind())?;
        *value = value.saturating_sub(1).max(min);
        log::debug!("[field] decrement: field={:?} value={}", self.id, *value);
        Ok(())
    }

    /// The select action: toggle, advance or increment depending on the kind
    pub fn activate(&self, config: &mut ScanConfiguration) -> Result<(), ValidationError> {
        match self.kind {
            FieldKind::Toggle => self.toggle(config),
            FieldKind::Choice => self.advance(config),
            FieldKind::Counter { .. } => self.increment(config),
            FieldKind::Text(_) => Err(self.wrong_kind()),
        }
    }

    pub fn current_display(&self, config: &ScanConfiguration) -> String {
        match self.kind {
            FieldKind::Text(_) => self.text(config).cloned().unwrap_or_default(),
            FieldKind::Toggle => {
                if self.flag(config).unwrap_or(false) { "[x]".to_string() } else { "[ ]".to_string() }
            }
            FieldKind::Choice => match self.id {
                FieldId::ScanTechnique => format!(
                    "< {} ({}) >",
                    config.scan_technique.as_str(),
                    config.scan_technique.flag()
                ),
                FieldId::OutputFormat => format!(
                    "< {} ({}) >",
                    config.output_format.as_str(),
                    config.output_format.flag()
                ),
                _ => String::new(),
            },
            FieldKind::Counter { max, .. } => {
                format!("{} / {}", self.counter(config).unwrap_or_default(), max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutputFormat, ScanTechnique};

    #[test]
    fn test_set_value_accepts_valid_text() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::Hostnames);
        field.set_value(&mut config, "scanme.example.com,10.0.0.0/24").unwrap();
        assert_eq!(config.hostnames, "scanme.example.com,10.0.0.0/24");
        assert_eq!(field.current_display(&config), "scanme.example.com,10.0.0.0/24");
    }

    #[test]
    fn test_set_value_rejects_too_long() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::OutputFile);
        field.set_value(&mut config, "out.txt").unwrap();

        let long = "a".repeat(MAX_TEXT_LENGTH + 1);
        let err = field.set_value(&mut config, &long).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { max: MAX_TEXT_LENGTH });
        assert_eq!(config.output_file, "out.txt");
    }

    #[test]
    fn test_set_value_accepts_exact_limit() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::OutputFile);
        let exact = "a".repeat(MAX_TEXT_LENGTH);
        field.set_value(&mut config, &exact).unwrap();
        assert_eq!(config.output_file.len(), MAX_TEXT_LENGTH);
    }

    #[test]
    fn test_set_value_rejects_whitespace_and_metacharacters() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::Hostnames);

        let err = field.set_value(&mut config, "a b").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCharacter { field: "Targets", ch: ' ' });

        assert!(field.set_value(&mut config, "host;rm").is_err());
        assert!(field.set_value(&mut config, "$(id)").is_err());
        assert!(config.hostnames.is_empty());
    }

    #[test]
    fn test_target_entries_cannot_start_with_dash() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::Hostnames);
        field.set_value(&mut config, "10.0.0.1-5,scanme.example.com").unwrap();

        for raw in ["-sU", "scanme.example.com,-sL", "a,b,-", ",-oX"] {
            let err = field.set_value(&mut config, raw).unwrap_err();
            assert_eq!(err, ValidationError::LeadingDash { field: "Targets" });
        }
        assert_eq!(config.hostnames, "10.0.0.1-5,scanme.example.com");

        // only bare target tokens are affected
        let excluded = Field::new(FieldId::ExcludedHostnames);
        excluded.set_value(&mut config, "-host").unwrap();
        let output = Field::new(FieldId::OutputFile);
        output.set_value(&mut config, "-").unwrap();
    }

    #[test]
    fn test_ports_rule() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::Ports);
        field.set_value(&mut config, "U:53,111,T:21-25,80").unwrap();
        assert!(field.set_value(&mut config, "22/tcp").is_err());
        assert_eq!(config.ports, "U:53,111,T:21-25,80");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::Ports);
        field.push_char(&mut config, '2').unwrap();
        field.push_char(&mut config, '2').unwrap();
        assert_eq!(config.ports, "22");

        field.pop_char(&mut config).unwrap();
        assert_eq!(config.ports, "2");
        field.pop_char(&mut config).unwrap();
        field.pop_char(&mut config).unwrap();
        assert!(config.ports.is_empty());
    }

    #[test]
    fn test_push_char_past_limit_keeps_value() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::ExcludedHostnames);
        let full = "h".repeat(MAX_TEXT_LENGTH);
        field.set_value(&mut config, &full).unwrap();

        assert!(field.push_char(&mut config, 'x').is_err());
        assert_eq!(config.excluded_hostnames, full);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::Traceroute);
        let original = config.traceroute;

        field.toggle(&mut config).unwrap();
        assert_ne!(config.traceroute, original);
        field.toggle(&mut config).unwrap();
        assert_eq!(config.traceroute, original);
    }

    #[test]
    fn test_toggle_display() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::OsDetection);
        assert_eq!(field.current_display(&config), "[ ]");
        field.toggle(&mut config).unwrap();
        assert_eq!(field.current_display(&config), "[x]");
    }

    #[test]
    fn test_advance_cycles_technique() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::ScanTechnique);
        for _ in 0..ScanTechnique::ALL.len() {
            field.advance(&mut config).unwrap();
        }
        assert_eq!(config.scan_technique, ScanTechnique::TcpSyn);

        field.advance(&mut config).unwrap();
        assert_eq!(config.scan_technique, ScanTechnique::TcpConnect);
        assert_eq!(field.current_display(&config), "< TCP Connect (-sT) >");
    }

    #[test]
    fn test_advance_cycles_format() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::OutputFormat);
        for _ in 0..OutputFormat::ALL.len() {
            field.activate(&mut config).unwrap();
        }
        assert_eq!(config.output_format, OutputFormat::Normal);
    }

    #[test]
    fn test_counter_clamps_silently() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::VersionIntensity);
        for _ in 0..20 {
            field.increment(&mut config).unwrap();
        }
        assert_eq!(config.version_intensity, MAX_VERSION_INTENSITY);
        assert_eq!(field.current_display(&config), "9 / 9");

        for _ in 0..20 {
            field.decrement(&mut config).unwrap();
        }
        assert_eq!(config.version_intensity, 0);
    }

    #[test]
    fn test_verbosity_bounds() {
        let mut config = ScanConfiguration::new();
        let field = Field::new(FieldId::VerbosityLevel);
        field.decrement(&mut config).unwrap();
        assert_eq!(config.verbosity_level, 0);
        for _ in 0..10 {
            field.activate(&mut config).unwrap();
        }
        assert_eq!(config.verbosity_level, MAX_VERBOSITY_LEVEL);
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let mut config = ScanConfiguration::new();
        let before = config.clone();

        assert!(matches!(
            Field::new(FieldId::Hostnames).toggle(&mut config),
            Err(ValidationError::WrongKind { .. })
        ));
        assert!(Field::new(FieldId::FastMode).set_value(&mut config, "x").is_err());
        assert!(Field::new(FieldId::Ports).activate(&mut config).is_err());
        assert!(Field::new(FieldId::Traceroute).increment(&mut config).is_err());
        assert_eq!(config, before);
    }
}
