//! End-to-end decode tests using a WXR export fixture.
//!
//! The fixture mirrors the shape of a real WordPress 2.6 export:
//! namespaced elements, CDATA display names, and the dual emission of
//! every item category association.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use wxr::{Item, ItemCategory, WpTime, WxrError};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn association(domain: &str, slug: &str, name: &str) -> ItemCategory {
    ItemCategory {
        domain: domain.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_decode_export_channel() {
    let rss = wxr::decode_str(&load_fixture("export.xml")).expect("fixture decodes");
    let channel = &rss.channel;

    assert_eq!(channel.title, "WordPress");
    assert_eq!(channel.link, "http://dev.wpcoder.com/dan/wordpress");
    assert_eq!(channel.description, "Just another WordPress weblog");
    assert_eq!(channel.wxr_version, "1.0");
    assert_eq!(channel.categories.len(), 8);
    assert_eq!(channel.tags.len(), 3);
    assert_eq!(channel.items.len(), 3);
}

#[test]
fn test_decode_export_categories_in_order() {
    let rss = wxr::decode_str(&load_fixture("export.xml")).expect("fixture decodes");
    let categories = &rss.channel.categories;

    assert_eq!(categories[0].id, 1);
    assert_eq!(categories[0].slug, "uncategorized");
    assert_eq!(categories[0].name, "Uncategorized");
    assert_eq!(categories[2].id, 3);
    assert_eq!(categories[2].slug, "child-category-i");
    assert_eq!(categories[2].name, "Child Category I");
    assert_eq!(categories[7].name, "Miscellaneous");

    let tags = &rss.channel.tags;
    assert_eq!(tags[0].id, 9);
    assert_eq!(tags[0].slug, "tag1");
    assert_eq!(tags[2].name, "tag5");
}

#[test]
fn test_decode_export_first_item() {
    let rss = wxr::decode_str(&load_fixture("export.xml")).expect("fixture decodes");

    let pub_date: WpTime = "Mon, 03 Sep 2007 18:23:34 +0000"
        .parse()
        .expect("valid pubDate");
    let expected = Item {
        id: 4,
        name: "a-simple-post-with-text".to_string(),
        title: "A Simple Post with Text".to_string(),
        author: "admin".to_string(),
        link: "http://dev.wpcoder.com/dan/wordpress/2008/08/a-simple-post-with-text/".to_string(),
        categories: vec![
            association("", "", "Child Category I"),
            association("category", "child-category-i", "Child Category I"),
            association("", "", "Parent Category I"),
            association("category", "parent-category-i", "Parent Category I"),
            association("", "", "tag1"),
            association("post_tag", "tag1", "tag1"),
            association("", "", "tag2"),
            association("post_tag", "tag2", "tag2"),
            association("", "", "tag5"),
            association("post_tag", "tag5", "tag5"),
        ],
        content: vec!["<p>This is some sample text.</p>".to_string()],
        post_type: "post".to_string(),
        pub_date: Some(pub_date),
    };

    assert_eq!(rss.channel.items[0], expected);
    assert_eq!(rss.channel.items[0].categories.len(), 10);
}

#[test]
fn test_decode_export_item_order_and_types() {
    let rss = wxr::decode_str(&load_fixture("export.xml")).expect("fixture decodes");
    let items = &rss.channel.items;

    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["A Simple Post with Text", "About", "A Post with Two Bodies"]
    );

    // post_type is an open string, not an enumeration
    assert_eq!(items[0].post_type, "post");
    assert_eq!(items[1].post_type, "page");
}

#[test]
fn test_decode_export_repeated_content_blocks() {
    let rss = wxr::decode_str(&load_fixture("export.xml")).expect("fixture decodes");
    let item = &rss.channel.items[2];

    assert_eq!(
        item.content,
        vec![
            "<p>First body block.</p>".to_string(),
            "<p>Second body block.</p>".to_string()
        ]
    );
}

#[test]
fn test_dual_occurrence_fidelity() {
    let rss = wxr::decode_str(&load_fixture("export.xml")).expect("fixture decodes");
    let categories = &rss.channel.items[0].categories;

    // Name-only occurrence first, slug-carrying occurrence second.
    assert_eq!(categories[0].slug, "");
    assert_eq!(categories[0].name, "Child Category I");
    assert_eq!(categories[1].slug, "child-category-i");
    assert_eq!(categories[1].name, "Child Category I");
}

#[test]
fn test_split_view_projections() {
    let rss = wxr::decode_str(&load_fixture("export.xml")).expect("fixture decodes");
    let item = &rss.channel.items[0];

    // Only domain-carrying occurrences are classifiable.
    assert_eq!(item.category_terms().count(), 2);
    assert_eq!(item.tag_terms().count(), 3);

    let tag_slugs: Vec<_> = item.tag_terms().map(|t| t.slug.as_str()).collect();
    assert_eq!(tag_slugs, vec!["tag1", "tag2", "tag5"]);
}

#[test]
fn test_timestamp_offset_preserved() {
    let rss = wxr::decode_str(&load_fixture("export.xml")).expect("fixture decodes");
    let pub_date = rss.channel.items[0].pub_date.expect("pubDate decoded");

    assert_eq!(pub_date.datetime().offset().local_minus_utc(), 0);
    assert_eq!(pub_date.to_string(), "Mon, 03 Sep 2007 18:23:34 +0000");
}

#[test]
fn test_padded_numeric_leaves_decode() {
    // Pretty-printed exports pad character data around numeric leaves.
    let xml = r#"<rss version="2.0">
      <channel>
        <title>Padded</title>
        <category>
          <term_id> 3 </term_id>
          <category_nicename>child-category-i</category_nicename>
          <cat_name><![CDATA[Child Category I]]></cat_name>
        </category>
        <item>
          <title>Padded Post</title>
          <post_id>
            4
          </post_id>
        </item>
      </channel>
    </rss>"#;

    let rss = wxr::decode_str(xml).expect("padded numerics decode");
    assert_eq!(rss.channel.categories[0].id, 3);
    assert_eq!(rss.channel.items[0].id, 4);
}

#[test]
fn test_many_items_preserve_document_order() {
    let mut xml = String::from(r#"<rss version="2.0"><channel><title>Bulk</title>"#);
    for i in 1..=54 {
        xml.push_str(&format!(
            "<item><post_id>{i}</post_id><title>Post {i}</title></item>"
        ));
    }
    xml.push_str("</channel></rss>");

    let rss = wxr::decode_str(&xml).expect("decodes");
    assert_eq!(rss.channel.items.len(), 54);
    for (index, item) in rss.channel.items.iter().enumerate() {
        assert_eq!(item.id, index as u64 + 1);
        assert_eq!(item.title, format!("Post {}", index + 1));
    }
}

#[test]
fn test_channel_without_categories_is_empty_not_error() {
    let xml = r#"<rss version="2.0">
      <channel>
        <title>Empty Blog</title>
      </channel>
    </rss>"#;

    let rss = wxr::decode_str(xml).expect("decodes");
    assert!(rss.channel.categories.is_empty());
    assert!(rss.channel.tags.is_empty());
    assert!(rss.channel.items.is_empty());
}

#[test]
fn test_malformed_pubdate_rejects_item() {
    let xml = r#"<rss version="2.0">
      <channel>
        <title>Bad Date</title>
        <item>
          <title>Broken</title>
          <pubDate>not-a-date</pubDate>
        </item>
      </channel>
    </rss>"#;

    match wxr::decode_str(xml) {
        Err(WxrError::MalformedScalar { field, value, .. }) => {
            assert_eq!(field, "pub_date");
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected MalformedScalar, got {other:?}"),
    }
}

#[test]
fn test_truncated_document() {
    let xml = r#"<rss version="2.0"><channel><item><title>cut"#;
    let result = wxr::decode_str(xml);
    assert!(matches!(result, Err(WxrError::TruncatedInput(_))));
}
