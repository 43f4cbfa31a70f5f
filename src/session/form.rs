// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Hidden-form extraction from SSO pages
//!
//! The login chain pages are machine-generated: one form, all state in hidden
//! inputs. This is not a general form parser; anything beyond that single-form
//! shape is rejected as ambiguous.

use std::collections::HashMap;

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::{Error, Result};

/// The single form extracted from one SSO page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenForm {
    /// Form action, possibly relative; empty if the page had no form
    pub action: String,
    /// Hidden input name -> value pairs
    pub fields: HashMap<String, String>,
}

/// Extract the form action and all hidden inputs from an HTML document.
///
/// A document with zero forms yields an empty action and empty fields; more
/// than one form is a fatal ambiguity.
pub fn extract_hidden_form(html: &str) -> Result<HiddenForm> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| Error::HtmlParse(e.to_string()))?;

    let mut action: Option<String> = None;
    let mut fields = HashMap::new();
    walk(&dom.document, &mut action, &mut fields)?;

    Ok(HiddenForm {
        action: action.unwrap_or_default(),
        fields,
    })
}

fn walk(
    handle: &Handle,
    action: &mut Option<String>,
    fields: &mut HashMap<String, String>,
) -> Result<()> {
    if let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = handle.data
    {
        match &*name.local {
            "form" => {
                if action.is_some() {
                    return Err(Error::ambiguous("found more than one <form>"));
                }
                *action = Some(attr(&attrs.borrow(), "action"));
            }
            "input" if attr(&attrs.borrow(), "type") == "hidden" => {
                let attrs = attrs.borrow();
                fields.insert(attr(&attrs, "name"), attr(&attrs, "value"));
            }
            _ => {}
        }
    }

    for child in handle.children.borrow().iter() {
        walk(child, action, fields)?;
    }

    Ok(())
}

/// Attribute lookup; a missing attribute yields an empty string, not an error.
fn attr(attrs: &[Attribute], name: &str) -> String {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_form_with_hidden_inputs() {
        let html = r#"
            <html><body>
                <form action="/step2" method="post">
                    <input type="hidden" name="a" value="1">
                    <input type="hidden" name="b" value="2">
                    <input type="text" name="visible" value="ignored">
                    <button type="submit">Continue</button>
                </form>
            </body></html>
        "#;

        let form = extract_hidden_form(html).unwrap();
        assert_eq!(form.action, "/step2");
        assert_eq!(form.fields.len(), 2);
        assert_eq!(form.fields["a"], "1");
        assert_eq!(form.fields["b"], "2");
    }

    #[test]
    fn test_two_forms_is_ambiguous() {
        let html = r#"
            <form action="/one"></form>
            <form action="/two"></form>
        "#;

        let err = extract_hidden_form(html).unwrap_err();
        assert!(matches!(err, Error::AmbiguousDocument(_)));
    }

    #[test]
    fn test_zero_forms_is_empty_not_error() {
        let form = extract_hidden_form("<html><body><p>hello</p></body></html>").unwrap();
        assert_eq!(form.action, "");
        assert!(form.fields.is_empty());
    }

    #[test]
    fn test_missing_attributes_yield_empty_strings() {
        let html = r#"
            <form>
                <input type="hidden">
            </form>
        "#;

        let form = extract_hidden_form(html).unwrap();
        assert_eq!(form.action, "");
        assert_eq!(form.fields.get(""), Some(&String::new()));
    }

    #[test]
    fn test_duplicate_hidden_name_last_wins() {
        let html = r#"
            <form action="/next">
                <input type="hidden" name="token" value="old">
                <input type="hidden" name="token" value="new">
            </form>
        "#;

        let form = extract_hidden_form(html).unwrap();
        assert_eq!(form.fields["token"], "new");
    }

    #[test]
    fn test_hidden_inputs_outside_form_are_collected() {
        // SSO pages occasionally leave trackers outside the form element.
        let html = r#"
            <input type="hidden" name="outer" value="x">
            <form action="/go"></form>
        "#;

        let form = extract_hidden_form(html).unwrap();
        assert_eq!(form.action, "/go");
        assert_eq!(form.fields["outer"], "x");
    }

    #[test]
    fn test_non_html_still_parses() {
        // html5ever error-corrects rather than failing; garbage input is a
        // formless document, which the bootstrapper then rejects on its own.
        let form = extract_hidden_form("{\"not\": \"html\"}").unwrap();
        assert_eq!(form.action, "");
    }
}
