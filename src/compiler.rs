use crate::types::{ScanConfiguration, DEFAULT_VERSION_INTENSITY};
use serde::Serialize;

pub const DEFAULT_BINARY: &str = "nmap";

/// Turn a configuration into nmap arguments.
///
/// Tokens come out in a fixed order: targets, host discovery, scan technique,
/// ports, version/OS detection, output. A flag is only emitted when its
/// option is set; the scan technique is dropped when a list or ping scan
/// turns port scanning off. A resumed scan compiles to `--resume <file>`
/// alone since nmap accepts no other options with it.
pub fn compile(config: &ScanConfiguration) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    if config.is_resuming() {
        tokens.push("--resume".to_string());
        tokens.push(config.resume_file.clone());
        log::debug!("[compiler] compile: resume={} tokens={}", config.resume_file, tokens.len());
        return tokens;
    }

    // target specification
    tokens.extend(config.targets().into_iter().map(String::from));
    push_with_value(&mut tokens, "--exclude", &config.excluded_hostnames);

    // host discovery
    push_if(&mut tokens, config.list_scan_only, "-sL");
    push_if(&mut tokens, config.ping_scan_only, "-sn");
    push_if(&mut tokens, config.skip_host_discovery, "-Pn");
    push_if(&mut tokens, config.traceroute, "--traceroute");

    // scan technique
    push_if(&mut tokens, !config.host_scan_only(), config.scan_technique.flag());

    // ports
    push_with_value(&mut tokens, "-p", &config.ports);
    push_with_value(&mut tokens, "--exclude-ports", &config.excluded_ports);
    push_if(&mut tokens, config.fast_mode, "-F");

    // service/version and os detection
    if config.version_detection {
        tokens.push("-sV".to_string());
        tokens.push("--version-intensity".to_string());
        tokens.push(config.version_intensity.to_string());
    } else if config.version_intensity != DEFAULT_VERSION_INTENSITY {
        log::debug!("[compiler] intensity_ignored: intensity={} version_detection=false",
            config.version_intensity);
    }
    push_if(&mut tokens, config.os_detection, "-O");
    push_if(&mut tokens, config.os_scan_limit, "--osscan-limit");
    push_if(&mut tokens, config.os_scan_guess, "--osscan-guess");

    // output
    tokens.push(config.output_format.flag().to_string());
    if !config.output_file.is_empty() {
        tokens.push(config.output_file.clone());
    }
    for _ in 0..config.verbosity_level {
        tokens.push("-v".to_string());
    }
    for _ in 0..config.debug_level {
        tokens.push("-d".to_string());
    }
    push_if(&mut tokens, config.show_reason_port_state, "--reason");
    push_if(&mut tokens, config.open_ports_only, "--open");

    log::debug!("[compiler] compile: tokens={}", tokens.len());
    tokens
}

/// Join the program name and its arguments into a printable command line
pub fn command_line(binary: &str, tokens: &[String]) -> String {
    std::iter::once(binary)
        .chain(tokens.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// What `--json` prints: the arguments, the joined command line and the
/// configuration they were compiled from
#[derive(Debug, Serialize)]
pub struct CommandOutput<'a> {
    pub binary: &'a str,
    pub args: &'a [String],
    pub command: String,
    pub configuration: &'a ScanConfiguration,
}

impl<'a> CommandOutput<'a> {
    pub fn new(binary: &'a str, args: &'a [String], configuration: &'a ScanConfiguration) -> Self {
        Self {
            binary,
            args,
            command: command_line(binary, args),
            configuration,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn push_if(tokens: &mut Vec<String>, condition: bool, flag: &str) {
    if condition {
        tokens.push(flag.to_string());
    }
}

fn push_with_value(tokens: &mut Vec<String>, flag: &str, value: &str) {
    if !value.is_empty() {
        tokens.push(flag.to_string());
        tokens.push(value.to_string());
    }
}
