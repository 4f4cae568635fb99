//! Streaming reader for Qt Linguist `.ts` translation documents.
//!
//! The TS format is a flat XML catalog: a `<TS>` root carrying the language
//! pair, `<context>` blocks named after UI classes, and `<message>` blocks
//! holding source text, optional disambiguation comment, location hints, and
//! exactly one `<translation>` (plain text, `type="unfinished"`, or a list of
//! `<numerusform>` variants for plural messages).
//!
//! Embedded markup in source/translation text arrives XML-escaped
//! (`&lt;a href=...&gt;`) and is kept verbatim after entity decoding; it is
//! string content, never structural XML. Elements this reader does not know
//! (newer toolchain output such as `<lengthvariant>`) are skipped whole, so
//! such documents still load.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use quick_xml::{Reader, events::Event};

use super::message::{
    Catalog, Location, Message, Translation, TranslationState, TranslationText, TsContext,
};

/// Leaf element whose text content is currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    None,
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
}

pub fn parse_ts_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    parse_ts(&content, &path.to_string_lossy())
}

pub fn parse_ts(content: &str, file_path: &str) -> Result<Catalog> {
    let mut reader = Reader::from_str(content);
    let line_index = build_line_index(content);

    let mut catalog = Catalog {
        file_path: file_path.to_string(),
        ..Default::default()
    };
    let mut saw_root = false;
    let mut context: Option<TsContext> = None;
    let mut message: Option<Message> = None;
    let mut forms: Vec<String> = Vec::new();
    let mut has_forms = false;
    let mut field = Field::None;
    let mut text = String::new();

    loop {
        let position = reader.buffer_position() as usize;
        let event = reader.read_event().with_context(|| {
            format!(
                "Malformed XML in {} (line {})",
                file_path,
                offset_to_line(&line_index, position)
            )
        })?;

        match event {
            Event::Eof => break,
            Event::Start(e) => {
                let name = e.name();
                match name.as_ref() {
                    b"TS" => {
                        saw_root = true;
                        for attr in e.attributes().flatten() {
                            let value = attr
                                .unescape_value()
                                .map(|v| v.to_string())
                                .unwrap_or_default();
                            match attr.key.as_ref() {
                                b"language" => catalog.language = Some(value),
                                b"sourcelanguage" => catalog.source_language = Some(value),
                                _ => {}
                            }
                        }
                    }
                    b"context" => context = Some(TsContext::default()),
                    b"name" if context.is_some() && message.is_none() => {
                        field = Field::ContextName;
                        text.clear();
                    }
                    b"message" if context.is_some() => {
                        let numerus = e.attributes().flatten().any(|attr| {
                            attr.key.as_ref() == b"numerus" && attr.value.as_ref() == b"yes"
                        });
                        message = Some(Message {
                            source: String::new(),
                            comment: None,
                            extracomment: None,
                            translatorcomment: None,
                            locations: Vec::new(),
                            numerus,
                            translation: Translation::default(),
                            ts_line: offset_to_line(&line_index, position),
                        });
                        forms.clear();
                        has_forms = false;
                    }
                    b"location" if message.is_some() => {
                        if let Some(msg) = message.as_mut() {
                            msg.locations.push(parse_location(&e));
                        }
                    }
                    b"source" if message.is_some() => {
                        field = Field::Source;
                        text.clear();
                    }
                    b"comment" if message.is_some() => {
                        field = Field::Comment;
                        text.clear();
                    }
                    b"extracomment" if message.is_some() => {
                        field = Field::ExtraComment;
                        text.clear();
                    }
                    b"translatorcomment" if message.is_some() => {
                        field = Field::TranslatorComment;
                        text.clear();
                    }
                    b"translation" if message.is_some() => {
                        if let Some(msg) = message.as_mut() {
                            msg.translation.state = translation_state(&e);
                        }
                        field = Field::Translation;
                        text.clear();
                    }
                    b"numerusform" if field == Field::Translation || field == Field::NumerusForm => {
                        field = Field::NumerusForm;
                        has_forms = true;
                        text.clear();
                    }
                    _ => {}
                }
            }
            // Self-closing elements carry attributes but no content.
            Event::Empty(e) => match e.name().as_ref() {
                b"location" if message.is_some() => {
                    if let Some(msg) = message.as_mut() {
                        msg.locations.push(parse_location(&e));
                    }
                }
                b"translation" if message.is_some() => {
                    if let Some(msg) = message.as_mut() {
                        msg.translation.state = translation_state(&e);
                        msg.translation.text = TranslationText::Single(String::new());
                    }
                }
                b"numerusform" if field == Field::Translation => {
                    forms.push(String::new());
                    has_forms = true;
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"name" if field == Field::ContextName => {
                    if let Some(ctx) = context.as_mut() {
                        ctx.name = std::mem::take(&mut text);
                    }
                    field = Field::None;
                }
                b"source" if field == Field::Source => {
                    if let Some(msg) = message.as_mut() {
                        msg.source = std::mem::take(&mut text);
                    }
                    field = Field::None;
                }
                b"comment" if field == Field::Comment => {
                    if let Some(msg) = message.as_mut() {
                        msg.comment = Some(std::mem::take(&mut text));
                    }
                    field = Field::None;
                }
                b"extracomment" if field == Field::ExtraComment => {
                    if let Some(msg) = message.as_mut() {
                        msg.extracomment = Some(std::mem::take(&mut text));
                    }
                    field = Field::None;
                }
                b"translatorcomment" if field == Field::TranslatorComment => {
                    if let Some(msg) = message.as_mut() {
                        msg.translatorcomment = Some(std::mem::take(&mut text));
                    }
                    field = Field::None;
                }
                b"numerusform" if field == Field::NumerusForm => {
                    forms.push(std::mem::take(&mut text));
                    // Whitespace between sibling numerusforms stays outside.
                    field = Field::Translation;
                    text.clear();
                }
                b"translation" => {
                    if let Some(msg) = message.as_mut() {
                        msg.translation.text = if has_forms {
                            TranslationText::Numerus(std::mem::take(&mut forms))
                        } else {
                            TranslationText::Single(std::mem::take(&mut text))
                        };
                    }
                    field = Field::None;
                }
                b"message" => {
                    if let (Some(ctx), Some(msg)) = (context.as_mut(), message.take()) {
                        ctx.messages.push(msg);
                    }
                    field = Field::None;
                }
                b"context" => {
                    if let Some(ctx) = context.take() {
                        catalog.contexts.push(ctx);
                    }
                    field = Field::None;
                }
                _ => {}
            },
            Event::Text(t) => {
                if field != Field::None {
                    let value = t.unescape().with_context(|| {
                        format!(
                            "Invalid entity in {} (line {})",
                            file_path,
                            offset_to_line(&line_index, position)
                        )
                    })?;
                    text.push_str(&value);
                }
            }
            Event::CData(cd) => {
                if field != Field::None {
                    text.push_str(&String::from_utf8_lossy(cd.as_ref()));
                }
            }
            _ => {}
        }
    }

    if !saw_root {
        bail!("Not a TS document (missing <TS> root element): {}", file_path);
    }

    Ok(catalog)
}

/// Read the optional `filename`/`line` attributes of a `<location>` hint.
fn parse_location(e: &quick_xml::events::BytesStart<'_>) -> Location {
    let mut location = Location::default();
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"filename" => {
                location.filename = attr.unescape_value().ok().map(|v| v.to_string());
            }
            b"line" => {
                location.line = attr.unescape_value().ok().and_then(|v| v.parse().ok());
            }
            _ => {}
        }
    }
    location
}

/// Read the review state from a `<translation>` element's `type` attribute.
fn translation_state(e: &quick_xml::events::BytesStart<'_>) -> TranslationState {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"type" {
            return match attr.value.as_ref() {
                b"unfinished" => TranslationState::Unfinished,
                b"vanished" => TranslationState::Vanished,
                b"obsolete" => TranslationState::Obsolete,
                _ => TranslationState::Finished,
            };
        }
    }
    TranslationState::Finished
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub(crate) fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
pub(crate) fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
