use ircmark::{render, resolve, spans, strip, STANDARD_COLORS, STANDARD_FORMATS};
use proptest::prelude::*;

/// Plain text that cannot start a span: no `$` at all.
fn plain() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?()\\-]{0,12}"
}

/// A directive body made of one or two registered names.
fn known_body() -> impl Strategy<Value = String> {
    let names: Vec<&'static str> = STANDARD_COLORS
        .iter()
        .map(|(name, _)| *name)
        .chain(STANDARD_FORMATS.iter().map(|(name, _)| *name))
        .chain(std::iter::once("random"))
        .collect();
    let name = proptest::sample::select(names);
    (name.clone(), proptest::option::of(name), " {0,2}").prop_map(|(a, b, pad)| match b {
        Some(b) => format!("{pad}{a},{pad}{b}{pad}"),
        None => format!("{pad}{a}{pad}"),
    })
}

/// Alternating plain chunks and well-formed spans with known names.
fn marked_up() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    proptest::collection::vec((plain(), known_body()), 0..6)
        .prop_map(|pairs| pairs.into_iter().unzip::<String, String, Vec<_>, Vec<_>>())
}

fn assemble(chunks: &[String], bodies: &[String], tail: &str) -> String {
    let mut text = String::new();
    for (chunk, body) in chunks.iter().zip(bodies) {
        text.push_str(chunk);
        text.push_str("$(");
        text.push_str(body);
        text.push(')');
    }
    text.push_str(tail);
    text
}

proptest! {
    #[test]
    fn text_without_markup_is_unchanged(text in "[^$]*") {
        prop_assert_eq!(strip(&text), text.clone());
        prop_assert_eq!(render(&text).unwrap(), text);
    }

    #[test]
    fn strip_keeps_exactly_the_plain_chunks(
        (chunks, bodies) in marked_up(),
        tail in plain(),
    ) {
        let text = assemble(&chunks, &bodies, &tail);
        prop_assert_eq!(strip(&text), format!("{}{}", chunks.concat(), tail));
        prop_assert_eq!(spans(&text).count(), bodies.len());
    }

    #[test]
    fn render_replaces_each_span_with_its_codes(
        (chunks, bodies) in marked_up(),
        tail in plain(),
    ) {
        // `random` would make the two sides disagree.
        prop_assume!(bodies.iter().all(|body| !body.contains("random")));
        let text = assemble(&chunks, &bodies, &tail);

        let mut expected = String::new();
        for (chunk, body) in chunks.iter().zip(&bodies) {
            expected.push_str(chunk);
            expected.push_str(&resolve(body).unwrap());
        }
        expected.push_str(&tail);

        prop_assert_eq!(render(&text).unwrap(), expected);
    }

    #[test]
    fn strip_is_idempotent_on_generated_markup(
        (chunks, bodies) in marked_up(),
        tail in plain(),
    ) {
        let text = assemble(&chunks, &bodies, &tail);
        let once = strip(&text);
        prop_assert_eq!(strip(&once), once);
    }

    #[test]
    fn strip_never_panics(text in "\\PC*") {
        let _ = strip(&text);
        let _ = spans(&text).count();
    }

    #[test]
    fn unterminated_markup_is_kept_verbatim(prefix in plain(), rest in "[a-z ,]{0,10}") {
        let text = format!("{}$({}", prefix.replace(['(', ')'], ""), rest);
        prop_assert_eq!(strip(&text), text.clone());
        prop_assert_eq!(render(&text).unwrap(), text);
    }
}
