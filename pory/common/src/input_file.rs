use crate::Span;

/// Index of a file inside of [`InputFiles`]
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct CodeId(pub usize);

/// A single source file
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Code {
    pub source: String,
    pub path: Option<String>,
}

#[derive(Debug, Eq, PartialEq, Hash)]
struct InputFile {
    code: Code,
    /// The absolute offset of the first byte of this file
    offset: usize,
}

/// Stores every source file that tokens and spans can refer to
///
/// Files are laid out one after another with a one byte gap in between, so an absolute
/// [`Span`] always belongs to exactly one file, even an empty span at the end of a file.
#[derive(Debug, Default)]
pub struct InputFiles {
    files: Vec<InputFile>,
}

/// A reference to a file and its absolute offset
#[derive(Debug, Clone, Copy)]
pub struct CodeRef<'a> {
    code: &'a Code,
    offset: usize,
}

impl<'a> CodeRef<'a> {
    pub fn get_code(&self) -> &'a Code {
        self.code
    }

    pub fn get_offset(&self) -> usize {
        self.offset
    }

    /// Returns the span that covers the whole file
    pub fn get_span(&self) -> Span {
        Span::new(self.offset, self.code.source.len())
    }

    /// Converts an absolute span into a span relative to the start of this file
    ///
    /// Returns `None` if the span does not belong to this file.
    pub fn get_relative_span(&self, span: Span) -> Option<Span> {
        let file_span = self.get_span();
        if !file_span.contains(span) {
            return None;
        }
        Some(Span::new(span.start - self.offset, span.len))
    }
}

impl InputFiles {
    pub fn new() -> Self {
        InputFiles::default()
    }

    /// Adds a file and returns its id
    pub fn add_input(&mut self, code: Code) -> CodeId {
        let offset = self
            .files
            .last()
            .map_or(0, |file| file.offset + file.code.source.len() + 1);
        self.files.push(InputFile { code, offset });
        CodeId(self.files.len() - 1)
    }

    pub fn get_code_ref(&self, id: CodeId) -> CodeRef<'_> {
        let file = &self.files[id.0];
        CodeRef {
            code: &file.code,
            offset: file.offset,
        }
    }

    /// Returns the file which contains the span
    pub fn find_span_code(&self, span: Span) -> Option<CodeRef<'_>> {
        let index = self
            .files
            .partition_point(|file| file.offset <= span.start)
            .checked_sub(1)?;
        let code_ref = self.get_code_ref(CodeId(index));
        code_ref.get_relative_span(span).map(|_| code_ref)
    }

    pub fn find_by_filename(&self, path: &str) -> Option<CodeId> {
        self.files
            .iter()
            .position(|file| file.code.path.as_deref() == Some(path))
            .map(CodeId)
    }

    /// Returns the text that is covered by `span`
    pub fn get_span_str(&self, span: Span) -> Option<&str> {
        let code = self.find_span_code(span)?;
        let relative = code.get_relative_span(span)?;
        code.code.source.get(relative.as_range())
    }

    /// Returns the zero-based line and column of the start of the span
    pub fn line_col(&self, span: Span) -> Option<(usize, usize)> {
        let code = self.find_span_code(span)?;
        let relative = code.get_relative_span(span)?;
        let before = code.code.source.get(..relative.start)?;
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |index| index + 1);
        let col = before[line_start..].chars().count();
        Some((line, col))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Code, CodeId, InputFiles, Span};

    fn files() -> InputFiles {
        let mut files = InputFiles::new();
        files.add_input(Code {
            source: "script A {\n    msgbox(\"hi\")\n}\n".into(),
            path: Some("a.pory".into()),
        });
        files.add_input(Code {
            source: "text T { \"x\" }".into(),
            path: Some("b.pory".into()),
        });
        files
    }

    #[test]
    fn spans_are_absolute() {
        let files = files();
        let second = files.get_code_ref(CodeId(1));

        assert_eq!(second.get_offset(), 31);
        assert_eq!(files.get_span_str(Span::new(31, 4)), Some("text"));
        assert_eq!(files.get_span_str(Span::new(15, 6)), Some("msgbox"));
        assert_eq!(files.find_by_filename("b.pory"), Some(CodeId(1)));
        assert_eq!(files.find_by_filename("c.pory"), None);
    }

    #[test]
    fn span_across_files_is_rejected() {
        let files = files();

        assert!(files.find_span_code(Span::new(28, 4)).is_none());
        assert!(files.find_span_code(Span::new(100, 1)).is_none());
    }

    #[test]
    fn line_col() {
        let files = files();

        assert_eq!(files.line_col(Span::new(15, 6)), Some((1, 4)));
        assert_eq!(files.line_col(Span::new(36, 1)), Some((0, 5)));
    }

    #[test]
    fn empty_span_at_end_of_file() {
        let mut files = InputFiles::new();
        files.add_input(Code {
            source: "script A {\n}\n".into(),
            path: Some("a.pory".into()),
        });
        files.add_input(Code {
            source: "script ".into(),
            path: Some("b.pory".into()),
        });

        let end_of_first = files.find_span_code(Span::new(13, 0)).unwrap();
        assert_eq!(end_of_first.get_code().path.as_deref(), Some("a.pory"));
        assert_eq!(files.line_col(Span::new(13, 0)), Some((2, 0)));

        let start_of_second = files.find_span_code(Span::new(14, 0)).unwrap();
        assert_eq!(start_of_second.get_code().path.as_deref(), Some("b.pory"));
        assert_eq!(files.line_col(Span::new(14, 0)), Some((0, 0)));
    }
}
