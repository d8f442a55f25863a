use ratatui::style::{Color, Modifier, Style};

/// Styles used by the renderer. Built once at startup and handed to the
/// renderer; never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub focused: Style,
    pub blurred: Style,
    pub placeholder: Style,
    pub value: Style,
    pub border: Style,
    pub error: Style,
    pub help: Style,
    pub command: Style,
}

impl Theme {
    pub fn colored() -> Self {
        Self {
            focused: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            blurred: Style::default().fg(Color::Gray),
            placeholder: Style::default().fg(Color::DarkGray),
            value: Style::default().fg(Color::White),
            border: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),
            help: Style::default().fg(Color::DarkGray),
            command: Style::default().fg(Color::Green),
        }
    }

    pub fn monochrome() -> Self {
        Self {
            focused: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            blurred: Style::default(),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            value: Style::default(),
            border: Style::default(),
            error: Style::default().add_modifier(Modifier::BOLD),
            help: Style::default().add_modifier(Modifier::DIM),
            command: Style::default(),
        }
    }

    pub fn from_color_flag(color: bool) -> Self {
        if color { Self::colored() } else { Self::monochrome() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
