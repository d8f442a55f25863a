use crate::error::ConfigurationConflictError;
use crate::types::{ScanConfiguration, ScanTechnique};

/// Check the cross-field rules a configuration must satisfy before it can be
/// submitted. Rules are checked in a fixed order and the first violation wins.
pub fn validate(config: &ScanConfiguration) -> Result<(), ConfigurationConflictError> {
    use ConfigurationConflictError::*;

    if config.is_resuming() {
        if !config.only_resume_set() {
            return Err(ResumeWithOtherOptions);
        }
        return Ok(());
    }

    if config.targets().is_empty() {
        return Err(NoTargets);
    }

    if config.list_scan_only && config.ping_scan_only {
        return Err(ListAndPingScan);
    }

    if config.host_scan_only() {
        let mode = if config.list_scan_only { "list scan (-sL)" } else { "ping scan (-sn)" };
        let port_options = [
            (!config.ports.is_empty(), "a port list (-p)"),
            (!config.excluded_ports.is_empty(), "excluded ports (--exclude-ports)"),
            (config.fast_mode, "fast mode (-F)"),
            (config.version_detection, "version detection (-sV)"),
            (config.os_detection, "OS detection (-O)"),
            (config.open_ports_only, "--open"),
            (config.scan_technique != ScanTechnique::default(), "a scan technique"),
        ];
        if let Some((_, option)) = port_options.iter().find(|(set, _)| *set) {
            return Err(PortOptionWithoutPortScan { mode, option: *option });
        }
    }

    if config.list_scan_only {
        if config.skip_host_discovery {
            return Err(ProbeOptionWithListScan { option: "skipping host discovery (-Pn)" });
        }
        if config.traceroute {
            return Err(ProbeOptionWithListScan { option: "--traceroute" });
        }
    }

    if config.fast_mode && !config.ports.is_empty() {
        return Err(FastModeWithPorts);
    }

    if config.os_detection && !config.scan_technique.is_tcp() {
        return Err(OsDetectionWithUdp);
    }

    if !config.os_detection {
        if config.os_scan_limit {
            return Err(OsOptionWithoutOsDetection { option: "--osscan-limit" });
        }
        if config.os_scan_guess {
            return Err(OsOptionWithoutOsDetection { option: "--osscan-guess" });
        }
    }

    if config.output_file.is_empty() {
        return Err(MissingOutputFile { flag: config.output_format.flag() });
    }

    log::debug!("[validate] configuration_valid: targets={}", config.targets().len());
    Ok(())
}
