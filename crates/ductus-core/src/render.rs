//! Markup serialization of a kerned [`Sequence`].

use crate::config::KernOptions;
use crate::kerning::LetterSpaceFormat;
use crate::sequence::{NodeKind, Sequence};

/// Wraps every character in a positioned `<span>` carrying its letter-spacing.
///
/// Tags are re-emitted verbatim; opening tags without a `class` attribute get a position class
/// when `annotate_tags` is set. Entities come out as their resolved glyph, HTML-escaped so the
/// result stays well formed.
pub fn render_markup(sequence: &Sequence, options: &KernOptions) -> String {
    let format = LetterSpaceFormat::from(options);
    let prefix = htmlize::escape_attribute(options.class_prefix.as_str());
    let mut out = String::with_capacity(sequence.original.len() * 8);

    for node in &sequence.nodes {
        match &node.kind {
            NodeKind::Literal { glyph } | NodeKind::Entity { glyph, .. } => {
                let mut buf = [0u8; 4];
                let text = htmlize::escape_text(&*glyph.glyph.encode_utf8(&mut buf));
                out.push_str(&format!(
                    r#"<span class="{prefix}{pos}" style="letter-spacing: {spacing}">{text}</span>"#,
                    pos = node.position,
                    spacing = format.format(node.kerning),
                ));
            }
            NodeKind::Tag { text, closing } => {
                if options.annotate_tags && !closing {
                    out.push_str(&annotate_tag(text, &format!("{prefix}tag-{}", node.position)));
                } else {
                    out.push_str(text);
                }
            }
        }
    }

    out
}

/// Inserts `class="..."` into an opening tag unless it already has a class or is a
/// declaration/comment (`<!...>`).
fn annotate_tag(tag: &str, class: &str) -> String {
    if tag.starts_with("<!") || has_class_attribute(tag) {
        return tag.to_string();
    }
    let body_end = if tag.ends_with("/>") {
        tag.len() - 2
    } else {
        tag.len() - 1
    };
    let body = tag[..body_end].trim_end();
    format!(r#"{body} class="{class}"{}"#, &tag[body_end..])
}

fn has_class_attribute(tag: &str) -> bool {
    let names = attribute_names_only(tag).to_ascii_lowercase();
    names.match_indices("class").any(|(idx, _)| {
        let before_ok = names[..idx]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        let after = names[idx + "class".len()..].trim_start();
        before_ok && after.starts_with('=')
    })
}

/// `tag` with the contents of quoted attribute values blanked out.
fn attribute_names_only(tag: &str) -> String {
    let mut quote = None;
    tag.chars()
        .map(|ch| match quote {
            Some(q) if ch == q => {
                quote = None;
                ch
            }
            Some(_) => ' ',
            None => {
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                }
                ch
            }
        })
        .collect()
}
