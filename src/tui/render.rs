use crate::compiler::{command_line, compile};
use crate::page::Control;
use crate::tui::theme::Theme;
use crate::wizard::Wizard;
use ratatui::{
    layout::Alignment,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FOCUS_MARKER: &str = "> ";
const BLUR_MARKER: &str = "  ";
const LABEL_WIDTH: usize = 28;
const SUBMIT_LABEL: &str = "[ Submit ]";
const HELP_TEXT: &str =
    "←/→ tab: page · ↑/↓: field · enter/space: select · +/-: adjust · esc: quit";

/// Projects the wizard into a frame. Reads state only.
pub struct Renderer {
    theme: Theme,
    binary: String,
}

impl Renderer {
    pub fn new(theme: Theme, binary: impl Into<String>) -> Self {
        Self { theme, binary: binary.into() }
    }

    /// Border title naming the current page
    pub fn title(&self, wizard: &Wizard) -> String {
        let title = wizard.current_page().map(|p| p.title).unwrap_or_default();
        format!(
            " Page {}/{} · {} ",
            wizard.page_index() + 1,
            wizard.pages().len(),
            title.to_uppercase()
        )
    }

    /// Every line of the frame body
    pub fn frame_text(&self, wizard: &Wizard) -> Text<'static> {
        let mut lines = Vec::new();

        if let Some(page) = wizard.current_page() {
            for (index, control) in page.controls.iter().enumerate() {
                let focused = index == wizard.focus_index();
                lines.push(self.control_line(control, focused, wizard));
            }
        }

        lines.push(Line::from(""));

        if let Some(error) = wizard.last_error() {
            lines.push(Line::from(Span::styled(format!("Error: {}", error), self.theme.error)));
            lines.push(Line::from(""));
        }

        let preview = command_line(&self.binary, &compile(wizard.config()));
        lines.push(Line::from(vec![
            Span::styled("Command: ", self.theme.help),
            Span::styled(preview, self.theme.command),
        ]));
        lines.push(Line::from(Span::styled(HELP_TEXT, self.theme.help)));

        Text::from(lines)
    }

    fn control_line(&self, control: &Control, focused: bool, wizard: &Wizard) -> Line<'static> {
        let marker = if focused { FOCUS_MARKER } else { BLUR_MARKER };
        let label_style = if focused { self.theme.focused } else { self.theme.blurred };

        match control {
            Control::Submit => Line::from(Span::styled(format!("{}{}", marker, SUBMIT_LABEL), label_style)),
            Control::Field(field) => {
                let display = field.current_display(wizard.config());
                let value = if display.is_empty() && field.is_text() {
                    Span::styled(field.placeholder.to_string(), self.theme.placeholder)
                } else {
                    Span::styled(display, self.theme.value)
                };

                Line::from(vec![
                    Span::styled(
                        format!("{}{:<width$}", marker, field.label, width = LABEL_WIDTH),
                        label_style,
                    ),
                    value,
                ])
            }
        }
    }

    /// Draw the wizard onto the whole terminal frame
    pub fn draw(&self, frame: &mut Frame, wizard: &Wizard) {
        let area = frame.area();
        log::trace!("[tui::render] draw: area={}x{} page={} focus={}",
            area.width, area.height, wizard.page_index(), wizard.focus_index());

        let block = Block::default()
            .title(self.title(wizard))
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let paragraph = Paragraph::new(self.frame_text(wizard))
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Event;
    use ratatui::{backend::TestBackend, Terminal};

    fn plain_lines(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_first_page_projection() {
        let renderer = Renderer::new(Theme::monochrome(), "nmap");
        let wizard = Wizard::new();
        let lines = plain_lines(&renderer.frame_text(&wizard));

        assert!(lines[0].starts_with("> Targets"));
        assert!(lines[0].ends_with("Hostnames to scan"));
        assert!(lines[1].starts_with("  Exclude hosts"));
        assert!(lines[4].ends_with("[ ]"));
        assert!(lines.iter().any(|l| l == "Command: nmap -sS -sV --version-intensity 3 -oN"));
        assert!(!lines.iter().any(|l| l.starts_with("Error:")));
    }

    #[test]
    fn test_error_and_value_shown() {
        let renderer = Renderer::new(Theme::colored(), "nmap");
        let wizard = "scanme".chars().fold(Wizard::new(), |w, c| w.update(Event::Char(c)));
        let wizard = wizard.update(Event::Char(' '));
        let lines = plain_lines(&renderer.frame_text(&wizard));

        assert!(lines[0].ends_with("scanme"));
        assert!(lines.iter().any(|l| l.starts_with("Error: Targets: ' ' is not allowed")));
    }

    #[test]
    fn test_submit_button_on_last_page() {
        let renderer = Renderer::new(Theme::monochrome(), "nmap");
        let mut wizard = Wizard::new();
        for _ in 0..wizard.pages().len() {
            wizard = wizard.update(Event::Right);
        }
        for _ in 0..20 {
            wizard = wizard.update(Event::Down);
        }
        let lines = plain_lines(&renderer.frame_text(&wizard));
        assert!(lines.iter().any(|l| l == "> [ Submit ]"));
        assert_eq!(renderer.title(&wizard), " Page 6/6 · OUTPUT ");
    }

    #[test]
    fn test_draw_to_test_backend() {
        let renderer = Renderer::new(Theme::colored(), "nmap");
        let wizard = Wizard::new().update(Event::Right);
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

        terminal.draw(|f| renderer.draw(f, &wizard)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Page 2/6 · HOST DISCOVERY"));
        assert!(screen.contains("List scan (-sL)"));
    }
}
