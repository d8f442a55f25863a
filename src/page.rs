use crate::field::{Field, FieldId};

/// Something that can hold focus on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Field(Field),
    Submit,
}

impl Control {
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Control::Field(field) => Some(field),
            Control::Submit => None,
        }
    }
}

/// One section of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub controls: Vec<Control>,
}

impl Page {
    pub fn new(title: &'static str, fields: &[FieldId]) -> Self {
        Self {
            title,
            controls: fields.iter().map(|id| Control::Field(Field::new(*id))).collect(),
        }
    }

    pub fn with_submit(mut self) -> Self {
        self.controls.push(Control::Submit);
        self
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn control(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }
}

/// The six pages of the wizard, submit button on the last one
pub fn default_pages() -> Vec<Page> {
    vec![
        Page::new(
            "Targets",
            &[
                FieldId::Hostnames,
                FieldId::ExcludedHostnames,
                FieldId::Ports,
                FieldId::ExcludedPorts,
                FieldId::FastMode,
            ],
        ),
        Page::new(
            "Host Discovery",
            &[
                FieldId::ListScanOnly,
                FieldId::PingScanOnly,
                FieldId::Traceroute,
                FieldId::SkipHostDiscovery,
            ],
        ),
        Page::new("Scan Technique", &[FieldId::ScanTechnique]),
        Page::new(
            "Service/Version Detection",
            &[FieldId::VersionDetection, FieldId::VersionIntensity],
        ),
        Page::new(
            "OS Detection",
            &[FieldId::OsDetection, FieldId::OsScanLimit, FieldId::OsScanGuess],
        ),
        Page::new(
            "Output",
            &[
                FieldId::OutputFormat,
                FieldId::OutputFile,
                FieldId::VerbosityLevel,
                FieldId::DebugLevel,
                FieldId::ShowReasonPortState,
                FieldId::OpenPortsOnly,
                FieldId::ResumeFile,
            ],
        )
        .with_submit(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_pages_layout() {
        let pages = default_pages();
        assert_eq!(pages.len(), 6);
        assert!(pages.iter().all(|p| !p.is_empty()));

        let last = pages.last().unwrap();
        assert_eq!(last.control(last.len() - 1), Some(&Control::Submit));

        let submits = pages
            .iter()
            .flat_map(|p| p.controls.iter())
            .filter(|c| **c == Control::Submit)
            .count();
        assert_eq!(submits, 1);
    }

    #[test]
    fn test_every_field_appears_once() {
        let pages = default_pages();
        let ids: Vec<FieldId> = pages
            .iter()
            .flat_map(|p| p.controls.iter())
            .filter_map(|c| c.as_field().map(|f| f.id))
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 22);
        assert_eq!(unique.len(), ids.len());
    }
}
