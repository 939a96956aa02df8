use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single line text input with a cursor counted in graphemes.
#[derive(Debug, Default, Clone)]
pub struct Editor {
    /// Current value of the input.
    input: String,
    /// Position of cursor, in graphemes from the start of input.
    cursor: usize,
}

impl Editor {
    pub fn new(input: String) -> Self {
        let cursor = input.graphemes(true).count();
        Self { input, cursor }
    }

    /// Returns current input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces input and moves cursor to its end.
    pub fn set_input(&mut self, input: String) {
        *self = Self::new(input);
    }

    pub fn clear(&mut self) {
        self.input = String::new();
        self.cursor = 0;
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.input.insert(index, new_char);
        // a combining char may merge into the previous grapheme
        self.cursor = self.input[..index + new_char.len_utf8()]
            .graphemes(true)
            .count();
    }

    /// Deletes the grapheme before the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.byte_index();
        let start = self
            .input
            .grapheme_indices(true)
            .nth(self.cursor - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.input.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.clamp_cursor(self.cursor.saturating_add(1));
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.input.graphemes(true).count();
    }

    pub fn is_cursor_at_end(&self) -> bool {
        self.cursor == self.input.graphemes(true).count()
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> u16 {
        UnicodeWidthStr::width(&self.input[..self.byte_index()]) as u16
    }

    /// Returns the byte index based on the grapheme position.
    fn byte_index(&self) -> usize {
        self.input
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.input.len())
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.input.graphemes(true).count())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::model::editor::Editor;

    #[test]
    fn editing() {
        #[derive(Clone, Copy)]
        enum Op {
            Char(char),
            Backspace,
            Left,
            Right,
            Home,
            End,
        }
        struct Case {
            description: &'static str,
            input: &'static str,
            ops: Vec<Op>,
            expect_input: &'static str,
            expect_column: u16,
        }
        let cases = vec![
            Case {
                description: "type into empty input",
                input: "",
                ops: vec![Op::Char('h'), Op::Char('i')],
                expect_input: "hi",
                expect_column: 2,
            },
            Case {
                description: "insert in the middle",
                input: "Chcago",
                ops: vec![Op::Home, Op::Right, Op::Right, Op::Char('i')],
                expect_input: "Chicago",
                expect_column: 3,
            },
            Case {
                description: "backspace at start is a no-op",
                input: "abc",
                ops: vec![Op::Home, Op::Backspace],
                expect_input: "abc",
                expect_column: 0,
            },
            Case {
                description: "backspace removes a whole grapheme",
                input: "cafe\u{301}",
                ops: vec![Op::Backspace],
                expect_input: "caf",
                expect_column: 3,
            },
            Case {
                description: "right stops at end",
                input: "ab",
                ops: vec![Op::Home, Op::Right, Op::Right, Op::Right],
                expect_input: "ab",
                expect_column: 2,
            },
            Case {
                description: "wide characters count double",
                input: "東京",
                ops: vec![Op::Left, Op::End],
                expect_input: "東京",
                expect_column: 4,
            },
        ];
        for case in cases {
            let mut editor = Editor::new(case.input.to_string());
            for op in case.ops.iter().copied() {
                match op {
                    Op::Char(c) => editor.enter_char(c),
                    Op::Backspace => editor.delete_char(),
                    Op::Left => editor.move_cursor_left(),
                    Op::Right => editor.move_cursor_right(),
                    Op::Home => editor.move_cursor_home(),
                    Op::End => editor.move_cursor_end(),
                }
            }
            assert_eq!(editor.input(), case.expect_input, "{} input", case.description);
            assert_eq!(
                editor.cursor_column(),
                case.expect_column,
                "{} cursor column",
                case.description
            );
        }
    }

    #[test]
    fn combining_char_joins_previous_grapheme() {
        let mut editor = Editor::new("cafe".to_string());
        editor.enter_char('\u{301}');
        assert!(editor.is_cursor_at_end());
        editor.delete_char();
        assert_eq!(editor.input(), "caf");
    }
}
