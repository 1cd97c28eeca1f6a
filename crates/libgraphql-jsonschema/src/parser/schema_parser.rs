use crate::LineCursor;
use crate::OperationKind;
use crate::Schema;
use crate::file_reader::FileExtensionFilter;
use crate::file_reader::discover_schema_files;
use crate::line_classifier::LineKind;
use crate::line_classifier::classify;
use crate::parser::Diagnostic;
use crate::parser::ParseError;
use crate::parser::Result;
use crate::parser::descriptions::read_multi_line_description;
use crate::parser::descriptions::read_single_line_description;
use crate::types;
use crate::types::EnumType;
use crate::types::FieldDescriptor;
use crate::types::ObjectType;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Parses SDL fragments into [`Schema`]s.
///
/// Lines that match no grammar rule are skipped and recorded as
/// [`Diagnostic`]s, which accumulate across every fragment this parser
/// handles. A malformed declaration is fatal: the first one aborts the whole
/// parse with a [`ParseError`].
#[derive(Clone, Debug, Default)]
pub struct SchemaParser {
    diagnostics: Vec<Diagnostic>,
}
impl SchemaParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line skipped so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    /// Parses a single in-memory fragment.
    pub fn parse_cursor(&mut self, cursor: LineCursor) -> Result<Schema> {
        FragmentParser::new(cursor, &mut self.diagnostics, &Schema::new()).parse()
    }

    /// Parses each file in order and merges the resulting fragments.
    ///
    /// Root type bindings declared by earlier files apply to later ones, so a
    /// `schema { query: Foo }` block in one file routes `type Foo` in a
    /// subsequent file to the query map.
    pub fn parse_files<P: AsRef<Path>>(
        &mut self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Schema> {
        let mut aggregate = Schema::new();
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            log::debug!("Parsing schema fragment {file_path:?}");
            let cursor = LineCursor::from_file(file_path);
            let fragment = FragmentParser::new(
                cursor,
                &mut self.diagnostics,
                &aggregate,
            ).parse()?;
            aggregate.merge(fragment);
        }
        Ok(aggregate)
    }

    /// Parses every file reachable from `root_file_or_dir`.
    ///
    /// A file stands for its whole parent directory: sibling fragments
    /// complete the schema. Files are parsed in file-name order, recursively,
    /// with no extension filtering. A path that does not exist yields an empty
    /// [`Schema`].
    pub fn parse_path(&mut self, root_file_or_dir: impl AsRef<Path>) -> Result<Schema> {
        let root = root_file_or_dir.as_ref();
        if !root.exists() {
            log::debug!("Schema path {root:?} does not exist");
            return Ok(Schema::new());
        }

        let root_dir = if root.is_file() {
            root.parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
        } else {
            root
        };

        let file_paths = discover_schema_files(root_dir, &FileExtensionFilter::Any)?;
        self.parse_files(file_paths)
    }

    pub fn parse_str(&mut self, content: &str) -> Result<Schema> {
        self.parse_cursor(LineCursor::from_str(content))
    }

    /// Drains the accumulated diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

/// What a block body does with a line that starts no declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum StrayLines {
    Reject,
    Skip,
}

/// Parse state for one fragment.
struct FragmentParser<'a> {
    cursor: LineCursor,
    declaration_line: usize,
    diagnostics: &'a mut Vec<Diagnostic>,
    schema: Schema,
}
impl<'a> FragmentParser<'a> {
    fn new(
        cursor: LineCursor,
        diagnostics: &'a mut Vec<Diagnostic>,
        root_bindings: &Schema,
    ) -> Self {
        let mut schema = Schema::new();
        schema.inherit_root_bindings(root_bindings);
        Self {
            cursor,
            declaration_line: 0,
            diagnostics,
            schema,
        }
    }

    fn parse(mut self) -> Result<Schema> {
        while let Some(line) = self.cursor.current() {
            let line = line.to_string();
            let line_kind = classify(Some(&line));
            log::trace!("ln {}: {line_kind:?}", self.cursor.current_line_number());

            let outcome = match line_kind {
                LineKind::Comment
                    | LineKind::MultiLineDescriptionInOneLine
                    | LineKind::MultiLineDescriptionOpenOrClose
                    | LineKind::SingleLineDescription => {
                    self.skip_comment_or_description(line_kind);
                    Ok(())
                },

                LineKind::Schema | LineKind::ClosingBrace => {
                    self.cursor.advance();
                    Ok(())
                },

                LineKind::SchemaQuery => {
                    self.parse_root_binding(OperationKind::Query);
                    Ok(())
                },
                LineKind::SchemaMutation => {
                    self.parse_root_binding(OperationKind::Mutation);
                    Ok(())
                },
                LineKind::SchemaSubscription => {
                    self.parse_root_binding(OperationKind::Subscription);
                    Ok(())
                },

                LineKind::Query => self.parse_operation_block(OperationKind::Query),
                LineKind::Mutation => self.parse_operation_block(OperationKind::Mutation),
                LineKind::Subscription =>
                    self.parse_operation_block(OperationKind::Subscription),

                LineKind::ObjectDefinition => self.parse_type_definition(&line),

                LineKind::ScalarDefinition => {
                    self.parse_scalar(&line);
                    Ok(())
                },
                LineKind::UnionDefinition => {
                    self.parse_union(&line);
                    Ok(())
                },
                LineKind::EnumDefinition => {
                    self.parse_enum(&line);
                    Ok(())
                },

                // Fields and union members mean nothing outside of a
                // definition.
                LineKind::FieldBoolean
                    | LineKind::FieldFloat
                    | LineKind::FieldId
                    | LineKind::FieldInt
                    | LineKind::FieldList
                    | LineKind::FieldReference
                    | LineKind::FieldString
                    | LineKind::UnionMember
                    | LineKind::Unmatched => {
                    self.skip_unmatched(&line);
                    Ok(())
                },
            };

            if let Err(source) = outcome {
                return Err(ParseError::Declaration {
                    file_path: self.cursor.file_path().map(Path::to_path_buf),
                    line_number: self.declaration_line,
                    source,
                });
            }
        }

        Ok(self.schema)
    }

    /// Assembles the next `name[(args)]: Type` declaration of a block body,
    /// which may span several lines when the argument list does.
    ///
    /// Returns `None` once the block's closing brace (which is consumed) or
    /// the end of input is reached.
    ///
    /// A line that starts no declaration is skipped as a [`Diagnostic`] in
    /// object bodies but returned as-is from operation blocks, where it then
    /// fails to parse.
    fn next_declaration(&mut self, stray_lines: StrayLines) -> Option<String> {
        let mut parts: Vec<String> = vec![];
        let mut paren_depth = 0usize;

        while let Some(line) = self.cursor.current() {
            let line = line.trim().to_string();
            let line_kind = classify(Some(&line));

            if line_kind == LineKind::ClosingBrace {
                if parts.is_empty() {
                    self.cursor.advance();
                    return None;
                }
                break;
            }
            if self.skip_comment_or_description(line_kind) {
                continue;
            }
            if line.is_empty() {
                self.cursor.advance();
                continue;
            }
            if parts.is_empty() && line_kind == LineKind::Unmatched && !line.contains('(') {
                match stray_lines {
                    StrayLines::Skip => {
                        self.skip_unmatched(&line);
                        continue;
                    },
                    StrayLines::Reject => {
                        self.declaration_line = self.cursor.current_line_number();
                        self.cursor.advance();
                        return Some(line);
                    },
                }
            }

            self.declaration_line = self.cursor.current_line_number();
            self.cursor.advance();

            // Only a colon outside of the argument list separates the
            // declaration from its return type.
            let mut has_type_separator = false;
            for ch in line.chars() {
                match ch {
                    '(' => paren_depth += 1,
                    ')' => paren_depth = paren_depth.saturating_sub(1),
                    ':' if paren_depth == 0 => has_type_separator = true,
                    _ => (),
                }
            }
            parts.push(line);
            if has_type_separator {
                break;
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    fn parse_enum(&mut self, opener: &str) {
        let enum_name = capture_name(enum_definition_name(), opener);
        self.cursor.advance();

        let mut enum_type = EnumType::new();
        while let Some(line) = self.cursor.current() {
            let line = line.to_string();
            let line_kind = classify(Some(&line));
            if line_kind == LineKind::ClosingBrace {
                self.cursor.advance();
                break;
            }
            if self.skip_comment_or_description(line_kind) {
                continue;
            }

            self.cursor.advance();
            let value = line.split('@').next().unwrap_or_default().trim();
            if enum_value().is_match(value) {
                enum_type.add_value(value);
            } else if !value.is_empty() {
                log::debug!("Skipping non-identifier line in enum `{enum_name}`: {line:?}");
            }
        }

        self.schema.add_type(enum_name, enum_type.into());
    }

    fn parse_object(&mut self, object_name: String) -> types::Result<()> {
        self.cursor.advance();

        let mut object_type = ObjectType::new();
        while let Some(declaration) = self.next_declaration(StrayLines::Skip) {
            let field = FieldDescriptor::parse(&declaration)?;
            if field.deprecated() {
                log::debug!("Field `{object_name}.{}` is deprecated", field.key());
            }
            let (key, value) = field.into_parts();
            object_type.add_field(key, value);
        }

        self.schema.add_type(object_name, object_type.into());
        Ok(())
    }

    fn parse_operation_block(&mut self, kind: OperationKind) -> types::Result<()> {
        self.cursor.advance();

        while let Some(declaration) = self.next_declaration(StrayLines::Reject) {
            let field = FieldDescriptor::parse(&declaration)?;
            if field.deprecated() {
                log::debug!("The `{}` {kind} is deprecated", field.key());
            }
            let (key, value) = field.into_parts();
            self.schema.add_operation(kind, key, value);
        }

        Ok(())
    }

    /// `query: Foo` inside a `schema { ... }` block.
    fn parse_root_binding(&mut self, kind: OperationKind) {
        let type_name = self.cursor.advance_and_get_current()
            .and_then(|line| line.split_once(':'))
            .map(|(_, type_name)| type_name.trim().to_string())
            .unwrap_or_default();
        log::trace!("{kind} root type is bound to `{type_name}`");
        self.schema.set_root_type_name(kind, type_name);
    }

    fn parse_scalar(&mut self, line: &str) {
        let scalar_name = capture_name(scalar_definition_name(), line);
        self.cursor.advance();
        self.schema.add_scalar(scalar_name);
    }

    /// `type Foo {`: an operation block if `Foo` is bound as a root type, an
    /// object definition otherwise.
    fn parse_type_definition(&mut self, opener: &str) -> types::Result<()> {
        let type_name = capture_name(object_definition_name(), opener);
        match self.schema.operation_kind_for_root_type(&type_name) {
            Some(kind) => self.parse_operation_block(kind),
            None => self.parse_object(type_name),
        }
    }

    fn parse_union(&mut self, opener: &str) {
        let (union_name, mut members) = match union_definition().captures(opener) {
            Some(captures) => (
                captures.get(1).map_or("", |m| m.as_str()).to_string(),
                split_union_members(captures.get(2).map_or("", |m| m.as_str())),
            ),
            None => (String::new(), vec![]),
        };
        self.cursor.advance();

        while let Some(line) = self.cursor.current() {
            if classify(Some(line)) != LineKind::UnionMember {
                break;
            }
            members.extend(split_union_members(line));
            self.cursor.advance();
        }

        self.schema.add_union(union_name, members);
    }

    /// Consumes the comment or description under the cursor, if that is what
    /// `line_kind` says it is.
    fn skip_comment_or_description(&mut self, line_kind: LineKind) -> bool {
        match line_kind {
            LineKind::Comment => {
                self.cursor.advance();
            },
            LineKind::MultiLineDescriptionInOneLine | LineKind::SingleLineDescription => {
                let description = read_single_line_description(&mut self.cursor);
                log::trace!("Discarding description: {description:?}");
            },
            LineKind::MultiLineDescriptionOpenOrClose => {
                let description = read_multi_line_description(&mut self.cursor);
                log::trace!("Discarding description: {description:?}");
            },
            _ => return false,
        }
        true
    }

    fn skip_unmatched(&mut self, line: &str) {
        if !line.trim().is_empty() {
            let diagnostic = Diagnostic {
                file_path: self.cursor.file_path().map(Path::to_path_buf),
                line: line.to_string(),
                line_number: self.cursor.current_line_number(),
            };
            log::debug!("{diagnostic}");
            self.diagnostics.push(diagnostic);
        }
        self.cursor.advance();
    }
}

fn capture_name(regex: &Regex, line: &str) -> String {
    regex.captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn split_union_members(text: &str) -> Vec<String> {
    text.split('|')
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .map(str::to_string)
        .collect()
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|err| panic!("invalid parser pattern `{pattern}`: {err}"))
}

fn enum_definition_name() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(r"^\s*enum\s+([A-Za-z_][A-Za-z0-9_]*)"))
}

fn enum_value() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(r"^[A-Za-z_][A-Za-z0-9_]*$"))
}

fn object_definition_name() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(r"^\s*type\s+([A-Za-z_][A-Za-z0-9_]*)"))
}

fn scalar_definition_name() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(r"^\s*scalar\s+([A-Za-z_][A-Za-z0-9_]*)"))
}

fn union_definition() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(r"^\s*union\s+([A-Za-z_][A-Za-z0-9_]*)\s*=(.*)$"))
}
