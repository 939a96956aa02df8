use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize, palette::tailwind},
    text::{Line, Span},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};

use crate::{
    app::model::{ResultsScroll, controller::CallState},
    models::{RecommendationItem, constants::NO_RESULTS_PLACEHOLDER},
};

const INDENT: &str = "   ";

/// What the results panel shows for a call state.
#[derive(Debug, PartialEq)]
pub enum ResultsView<'a> {
    Placeholder,
    Loading,
    Message(&'a str),
    List(&'a [RecommendationItem]),
}

impl<'a> ResultsView<'a> {
    pub fn project(state: &'a CallState) -> Self {
        match state {
            CallState::Idle => ResultsView::Placeholder,
            CallState::Loading => ResultsView::Loading,
            CallState::Error(msg) => ResultsView::Message(msg),
            CallState::Success(items) if items.is_empty() => ResultsView::Placeholder,
            CallState::Success(items) => ResultsView::List(items),
        }
    }

    /// Lines of the panel body for a given content width. Items are numbered by position.
    pub fn lines(&self, width: usize) -> Vec<Line<'a>> {
        match self {
            ResultsView::Placeholder => vec![Line::styled(
                NO_RESULTS_PLACEHOLDER,
                Style::new().fg(tailwind::GRAY.c500),
            )],
            ResultsView::Loading => vec![Line::styled(
                "Fetching recommendations...",
                Style::new().fg(tailwind::AMBER.c300),
            )],
            ResultsView::Message(msg) => {
                vec![Line::styled(*msg, Style::new().fg(tailwind::RED.c400))]
            }
            ResultsView::List(items) => {
                let wrap_width = width.saturating_sub(INDENT.len()).max(1);
                let mut lines = Vec::new();
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        lines.push(Line::default());
                    }
                    lines.push(Line::from(
                        Span::raw(format!("{}. {}", idx + 1, item.name)).bold(),
                    ));
                    lines.extend(
                        textwrap::wrap(&item.description, wrap_width)
                            .into_iter()
                            .map(|l| Line::from(format!("{INDENT}{l}"))),
                    );
                    lines.push(Line::styled(
                        format!("{INDENT}Recommended Restaurants:"),
                        Style::new()
                            .fg(tailwind::AMBER.c300)
                            .add_modifier(Modifier::ITALIC),
                    ));
                    lines.extend(
                        item.restaurants
                            .iter()
                            .map(|r| Line::from(format!("{INDENT}• {r}"))),
                    );
                }
                lines
            }
        }
    }
}

pub struct Results<'a> {
    view: ResultsView<'a>,
}

impl<'a> Results<'a> {
    pub fn new(state: &'a CallState) -> Self {
        Self {
            view: ResultsView::project(state),
        }
    }
}

impl StatefulWidget for Results<'_> {
    type State = ResultsScroll;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ResultsScroll) {
        let title = match self.view {
            ResultsView::List(items) => format!(" Recommendations ({}) ", items.len()),
            _ => " Recommendations ".to_string(),
        };
        let block = Block::bordered().title(Line::from(title).centered());
        let inner = block.inner(area);
        let lines = self.view.lines(inner.width as usize);
        scroll.fit(lines.len(), inner.height);

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll.offset, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::FETCH_FAILED;

    fn item(name: &str, description: &str, restaurants: &[&str]) -> RecommendationItem {
        RecommendationItem {
            name: name.to_string(),
            description: description.to_string(),
            restaurants: restaurants.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn plain(lines: Vec<Line>) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn projection() {
        let items = vec![item("Pizza", "Cheesy", &["Tony's"])];
        let failed = CallState::Error(FETCH_FAILED.to_string());
        let success = CallState::Success(items.clone());
        let empty_success = CallState::Success(vec![]);

        assert_eq!(
            ResultsView::project(&CallState::Idle),
            ResultsView::Placeholder
        );
        assert_eq!(
            ResultsView::project(&CallState::Loading),
            ResultsView::Loading
        );
        assert_eq!(
            ResultsView::project(&failed),
            ResultsView::Message(FETCH_FAILED)
        );
        assert_eq!(
            ResultsView::project(&empty_success),
            ResultsView::Placeholder,
            "empty success looks like idle"
        );
        assert_eq!(
            ResultsView::project(&success),
            ResultsView::List(items.as_slice())
        );
    }

    #[test]
    fn list_lines() {
        let state = CallState::Success(vec![
            item("Pizza", "Cheesy", &["Tony's", "Luigi's"]),
            item("Pho", "Brothy", &["Saigon Bowl"]),
        ]);

        let rendered = plain(ResultsView::project(&state).lines(40));
        insta::assert_snapshot!(rendered, @r"
        1. Pizza
           Cheesy
           Recommended Restaurants:
           • Tony's
           • Luigi's

        2. Pho
           Brothy
           Recommended Restaurants:
           • Saigon Bowl
        ");
    }

    #[test]
    fn long_descriptions_wrap_to_width() {
        let description = "Slow simmered broth with hand pulled noodles and plenty of herbs";
        let state = CallState::Success(vec![item("Noodles", description, &[])]);

        let lines = ResultsView::project(&state).lines(24);
        let description_lines: Vec<String> = lines[1..lines.len() - 1]
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(description_lines.len() > 1, "description wraps");
        for line in &description_lines {
            assert!(line.chars().count() <= 24, "{line:?} fits");
            assert!(line.starts_with(INDENT), "{line:?} is indented");
        }
        let rejoined: Vec<&str> = description_lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .collect();
        assert_eq!(rejoined.join(" "), description, "no words lost");
    }
}
