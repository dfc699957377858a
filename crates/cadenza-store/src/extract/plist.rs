//! Property-list structures embedded in store documents.
//!
//! Track lists and discographies arrive as `plist` → `array` → `dict`
//! blocks where each dict is an alternating sequence of `key` nodes and
//! value nodes. Value typing is loose on the wire (`<string>`,
//! `<integer>`, `<true/>`, bare text), so lookups coerce on access.

use std::str::FromStr;

use crate::document::Node;

/// The `dict` children of the first `plist` array below `scope`, in
/// document order.
pub(crate) fn plist_dicts(scope: Node<'_>) -> Vec<Node<'_>> {
    scope
        .descendants_named("plist")
        .next()
        .and_then(|plist| plist.descendants_named("array").next())
        .map(|array| array.children_named("dict").collect())
        .unwrap_or_default()
}

/// One parsed dict: key names paired with their value nodes.
pub(crate) struct PlistDict<'doc> {
    entries: Vec<(String, Node<'doc>)>,
}

impl<'doc> PlistDict<'doc> {
    /// Pair up the alternating `key`/value children. A trailing key with
    /// no value node is dropped.
    pub(crate) fn parse(dict: Node<'doc>) -> Self {
        let mut entries = Vec::new();
        let mut pending_key: Option<String> = None;
        for child in dict.children() {
            if child.name() == "key" {
                pending_key = Some(child.text().to_owned());
            } else if let Some(key) = pending_key.take() {
                entries.push((key, child));
            }
        }
        Self { entries }
    }

    fn value(&self, key: &str) -> Option<Node<'doc>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| *node)
    }

    /// Non-empty text of the value node for `key`.
    pub(crate) fn string(&self, key: &str) -> Option<String> {
        let text = self.value(key)?.text();
        if text.is_empty() {
            None
        } else {
            Some(text.to_owned())
        }
    }

    /// Parsed numeric value for `key`.
    pub(crate) fn integer<T: FromStr>(&self, key: &str) -> Option<T> {
        self.value(key)?.text().parse().ok()
    }

    /// Boolean value for `key`: the `<true/>`/`<false/>` element forms, or
    /// a `1`/`true` text value. Absent keys are false.
    pub(crate) fn boolean(&self, key: &str) -> bool {
        self.value(key).is_some_and(|node| match node.name() {
            "true" => true,
            "false" => false,
            _ => matches!(node.text(), "1" | "true"),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::Document;

    const TRACKS: &str = r#"
        <TrackList>
          <plist version="1.0">
            <array>
              <dict>
                <key>songId</key><string>8234</string>
                <key>itemName</key><string>At Least That's What You Said</string>
                <key>trackNumber</key><integer>1</integer>
                <key>explicit</key><true/>
              </dict>
              <dict>
                <key>songId</key><string>8235</string>
                <key>itemName</key><string>Hell Is Chrome</string>
                <key>trackNumber</key><integer>2</integer>
                <key>explicit</key><integer>0</integer>
              </dict>
            </array>
          </plist>
        </TrackList>"#;

    #[test]
    fn test_dicts_in_document_order() {
        let doc = Document::parse(TRACKS).unwrap();
        let dicts = plist_dicts(doc.root());
        assert_eq!(dicts.len(), 2);

        let first = PlistDict::parse(dicts[0]);
        assert_eq!(first.string("songId").as_deref(), Some("8234"));
        assert_eq!(first.integer::<u32>("trackNumber"), Some(1));
    }

    #[test]
    fn test_boolean_forms() {
        let doc = Document::parse(TRACKS).unwrap();
        let dicts = plist_dicts(doc.root());
        assert!(PlistDict::parse(dicts[0]).boolean("explicit"));
        assert!(!PlistDict::parse(dicts[1]).boolean("explicit"));
        assert!(!PlistDict::parse(dicts[0]).boolean("missingKey"));
    }

    #[test]
    fn test_missing_and_empty_values() {
        let doc = Document::parse(
            "<Root><plist><array><dict>\
               <key>empty</key><string></string>\
               <key>dangling</key>\
             </dict></array></plist></Root>",
        )
        .unwrap();
        let dict = PlistDict::parse(plist_dicts(doc.root())[0]);
        assert_eq!(dict.string("empty"), None);
        assert_eq!(dict.string("dangling"), None);
        assert_eq!(dict.integer::<i32>("empty"), None);
    }

    #[test]
    fn test_no_plist_is_empty() {
        let doc = Document::parse("<Root><TextView>no tracks</TextView></Root>").unwrap();
        assert!(plist_dicts(doc.root()).is_empty());
    }
}
