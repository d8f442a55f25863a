use serde::Serialize;

pub const MAX_VERSION_INTENSITY: u8 = 9;
pub const DEFAULT_VERSION_INTENSITY: u8 = 3;
pub const MAX_VERBOSITY_LEVEL: u8 = 5;
pub const MAX_DEBUG_LEVEL: u8 = 9;

/// How nmap probes the state of each port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ScanTechnique {
    #[default]
    TcpSyn,
    TcpConnect,
    TcpAck,
    TcpWindow,
    TcpMaimon,
    UdpScan,
    TcpNull,
}

impl ScanTechnique {
    pub const ALL: [ScanTechnique; 7] = [
        ScanTechnique::TcpSyn,
        ScanTechnique::TcpConnect,
        ScanTechnique::TcpAck,
        ScanTechnique::TcpWindow,
        ScanTechnique::TcpMaimon,
        ScanTechnique::UdpScan,
        ScanTechnique::TcpNull,
    ];

    /// The nmap flag selecting this technique
    pub fn flag(&self) -> &'static str {
        match self {
            ScanTechnique::TcpSyn => "-sS",
            ScanTechnique::TcpConnect => "-sT",
            ScanTechnique::TcpAck => "-sA",
            ScanTechnique::TcpWindow => "-sW",
            ScanTechnique::TcpMaimon => "-sM",
            ScanTechnique::UdpScan => "-sU",
            ScanTechnique::TcpNull => "-sN",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanTechnique::TcpSyn => "TCP SYN",
            ScanTechnique::TcpConnect => "TCP Connect",
            ScanTechnique::TcpAck => "TCP ACK",
            ScanTechnique::TcpWindow => "TCP Window",
            ScanTechnique::TcpMaimon => "TCP Maimon",
            ScanTechnique::UdpScan => "UDP",
            ScanTechnique::TcpNull => "TCP Null",
        }
    }

    /// Next technique in the cycle, wrapping after the last one
    pub fn next(&self) -> Self {
        match self {
            ScanTechnique::TcpSyn => ScanTechnique::TcpConnect,
            ScanTechnique::TcpConnect => ScanTechnique::TcpAck,
            ScanTechnique::TcpAck => ScanTechnique::TcpWindow,
            ScanTechnique::TcpWindow => ScanTechnique::TcpMaimon,
            ScanTechnique::TcpMaimon => ScanTechnique::UdpScan,
            ScanTechnique::UdpScan => ScanTechnique::TcpNull,
            ScanTechnique::TcpNull => ScanTechnique::TcpSyn,
        }
    }

    pub fn is_tcp(&self) -> bool {
        !matches!(self, ScanTechnique::UdpScan)
    }
}

/// Format of the report nmap writes to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Normal,
    Xml,
    Script,
    Grepable,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Normal,
        OutputFormat::Xml,
        OutputFormat::Script,
        OutputFormat::Grepable,
    ];

    pub fn flag(&self) -> &'static str {
        match self {
            OutputFormat::Normal => "-oN",
            OutputFormat::Xml => "-oX",
            OutputFormat::Script => "-oS",
            OutputFormat::Grepable => "-oG",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Normal => "Normal",
            OutputFormat::Xml => "XML",
            OutputFormat::Script => "Script kiddie",
            OutputFormat::Grepable => "Grepable",
        }
    }

    /// Next format in the cycle, wrapping after the last one
    pub fn next(&self) -> Self {
        match self {
            OutputFormat::Normal => OutputFormat::Xml,
            OutputFormat::Xml => OutputFormat::Script,
            OutputFormat::Script => OutputFormat::Grepable,
            OutputFormat::Grepable => OutputFormat::Normal,
        }
    }
}

/// Every option the wizard collects. Mutated only through the wizard's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanConfiguration {
    // targets
    pub hostnames: String,
    pub excluded_hostnames: String,
    pub ports: String,
    pub excluded_ports: String,
    pub fast_mode: bool,
    // host discovery
    pub list_scan_only: bool,
    pub ping_scan_only: bool,
    pub traceroute: bool,
    pub skip_host_discovery: bool,
    // scan technique
    pub scan_technique: ScanTechnique,
    // service/version detection
    pub version_detection: bool,
    pub version_intensity: u8,
    // os detection
    pub os_detection: bool,
    pub os_scan_limit: bool,
    pub os_scan_guess: bool,
    // output
    pub output_format: OutputFormat,
    pub output_file: String,
    pub verbosity_level: u8,
    pub debug_level: u8,
    pub show_reason_port_state: bool,
    pub open_ports_only: bool,
    pub resume_file: String,
    #[serde(skip)]
    pub last_error: Option<String>,
}

impl ScanConfiguration {
    /// Defaults: `-sV` at intensity 3, TCP SYN, normal output, everything
    /// else off or empty.
    ///
    /// Fast mode starts off even though the form it replaces started with it
    /// on: the default configuration must compile to exactly
    /// `-sS -sV --version-intensity 3 -oN`, which leaves no room for `-F`.
    pub fn new() -> Self {
        Self {
            hostnames: String::new(),
            excluded_hostnames: String::new(),
            ports: String::new(),
            excluded_ports: String::new(),
            fast_mode: false,
            list_scan_only: false,
            ping_scan_only: false,
            traceroute: false,
            skip_host_discovery: false,
            scan_technique: ScanTechnique::TcpSyn,
            version_detection: true,
            version_intensity: DEFAULT_VERSION_INTENSITY,
            os_detection: false,
            os_scan_limit: false,
            os_scan_guess: false,
            output_format: OutputFormat::Normal,
            output_file: String::new(),
            verbosity_level: 0,
            debug_level: 0,
            show_reason_port_state: false,
            open_ports_only: false,
            resume_file: String::new(),
            last_error: None,
        }
    }

    /// Whether port scanning is switched off by a list or ping scan
    pub fn host_scan_only(&self) -> bool {
        self.list_scan_only || self.ping_scan_only
    }

    pub fn is_resuming(&self) -> bool {
        !self.resume_file.is_empty()
    }

    /// True when nothing but the resume file differs from the defaults
    pub fn only_resume_set(&self) -> bool {
        let mut rest = self.clone();
        rest.resume_file.clear();
        rest.last_error = None;
        rest == Self::new()
    }

    /// Individual targets from the comma separated hostnames field
    pub fn targets(&self) -> Vec<&str> {
        self.hostnames
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl Default for ScanConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfiguration::default();
        assert_eq!(config.scan_technique, ScanTechnique::TcpSyn);
        assert_eq!(config.output_format, OutputFormat::Normal);
        assert!(config.version_detection);
        assert_eq!(config.version_intensity, 3);
        assert!(!config.fast_mode);
        assert!(config.hostnames.is_empty());
        assert!(config.last_error.is_none());
    }

    #[test]
    fn test_technique_cycle_visits_every_variant() {
        let mut technique = ScanTechnique::TcpSyn;
        for expected in ScanTechnique::ALL {
            assert_eq!(technique, expected);
            technique = technique.next();
        }
        assert_eq!(technique, ScanTechnique::TcpSyn);
    }

    #[test]
    fn test_format_cycle_visits_every_variant() {
        let mut format = OutputFormat::Normal;
        for expected in OutputFormat::ALL {
            assert_eq!(format, expected);
            format = format.next();
        }
        assert_eq!(format, OutputFormat::Normal);
    }

    #[test]
    fn test_flags_are_distinct() {
        let mut flags: Vec<_> = ScanTechnique::ALL.iter().map(|t| t.flag()).collect();
        flags.sort();
        flags.dedup();
        assert_eq!(flags.len(), ScanTechnique::ALL.len());

        let mut flags: Vec<_> = OutputFormat::ALL.iter().map(|f| f.flag()).collect();
        flags.sort();
        flags.dedup();
        assert_eq!(flags.len(), OutputFormat::ALL.len());
    }

    #[test]
    fn test_targets_split_on_commas() {
        let mut config = ScanConfiguration::new();
        config.hostnames = "10.0.0.1,scanme.example.com,,".to_string();
        assert_eq!(config.targets(), vec!["10.0.0.1", "scanme.example.com"]);
    }

    #[test]
    fn test_only_resume_set() {
        let mut config = ScanConfiguration::new();
        config.resume_file = "scan.log".to_string();
        config.last_error = Some("old".to_string());
        assert!(config.only_resume_set());

        config.traceroute = true;
        assert!(!config.only_resume_set());
    }
}
