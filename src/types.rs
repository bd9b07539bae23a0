//! Record types decoded from a WXR export.
//!
//! These are passive, schema-bound records: each type declares its
//! bindings through [`Decode`] and the engine gives them behavior. All
//! collections preserve source document order, which reflects
//! publication order in the export.

use serde::{Deserialize, Serialize};

use crate::engine::Decoder;
use crate::error::Result;
use crate::scalar::WpTime;
use crate::schema::{Binding, Decode, Source};

/// Domain value WXR uses for category associations on items.
pub const DOMAIN_CATEGORY: &str = "category";

/// Domain value WXR uses for tag associations on items.
pub const DOMAIN_TAG: &str = "post_tag";

/// Root record of a WXR document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rss {
    /// The single channel describing the blog.
    pub channel: Channel,
}

impl Decode for Rss {
    const ELEMENT: &'static str = "rss";

    fn bindings() -> &'static [Binding] {
        const BINDINGS: &[Binding] = &[Binding::nested("channel", "channel").required()];
        BINDINGS
    }

    fn assign(
        &mut self,
        field: &'static str,
        source: Source<'_, '_>,
        decoder: &Decoder,
    ) -> Result<()> {
        if field == "channel" {
            self.channel = decoder.nested(field, &source)?;
        }
        Ok(())
    }
}

/// Blog-level metadata and the ordered content of the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub title: String,
    pub link: String,
    /// Blog categories, in document order.
    pub categories: Vec<Category>,
    /// Blog tags, in document order. Not every export revision emits
    /// these as a separate collection.
    pub tags: Vec<Tag>,
    pub description: String,
    /// WXR format version string, e.g. "1.0".
    pub wxr_version: String,
    /// Posts in publication order.
    pub items: Vec<Item>,
}

impl Decode for Channel {
    const ELEMENT: &'static str = "channel";

    fn bindings() -> &'static [Binding] {
        const BINDINGS: &[Binding] = &[
            Binding::scalar("title", "title"),
            Binding::scalar("link", "link"),
            Binding::repeated_nested("category", "categories"),
            Binding::repeated_nested("tag", "tags"),
            Binding::scalar("description", "description"),
            Binding::scalar("wxr_version", "wxr_version"),
            Binding::repeated_nested("item", "items"),
        ];
        BINDINGS
    }

    fn assign(
        &mut self,
        field: &'static str,
        source: Source<'_, '_>,
        decoder: &Decoder,
    ) -> Result<()> {
        match field {
            "title" => self.title = decoder.scalar(field, &source)?,
            "link" => self.link = decoder.scalar(field, &source)?,
            "categories" => self.categories.push(decoder.nested(field, &source)?),
            "tags" => self.tags.push(decoder.nested(field, &source)?),
            "description" => self.description = decoder.scalar(field, &source)?,
            "wxr_version" => self.wxr_version = decoder.scalar(field, &source)?,
            "items" => self.items.push(decoder.nested(field, &source)?),
            _ => {}
        }
        Ok(())
    }
}

/// A category defined at the blog level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Numeric term identifier.
    pub id: u64,
    /// URL-safe slug.
    pub slug: String,
    /// Display name.
    pub name: String,
}

impl Decode for Category {
    const ELEMENT: &'static str = "category";

    fn bindings() -> &'static [Binding] {
        const BINDINGS: &[Binding] = &[
            Binding::scalar("term_id", "id"),
            Binding::scalar("category_nicename", "slug"),
            Binding::scalar("cat_name", "name"),
        ];
        BINDINGS
    }

    fn assign(
        &mut self,
        field: &'static str,
        source: Source<'_, '_>,
        decoder: &Decoder,
    ) -> Result<()> {
        match field {
            "id" => self.id = decoder.scalar(field, &source)?,
            "slug" => self.slug = decoder.scalar(field, &source)?,
            "name" => self.name = decoder.scalar(field, &source)?,
            _ => {}
        }
        Ok(())
    }
}

/// A tag defined at the blog level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Numeric term identifier.
    pub id: u64,
    /// URL-safe slug.
    pub slug: String,
    /// Display name.
    pub name: String,
}

impl Decode for Tag {
    const ELEMENT: &'static str = "tag";

    fn bindings() -> &'static [Binding] {
        const BINDINGS: &[Binding] = &[
            Binding::scalar("term_id", "id"),
            Binding::scalar("tag_slug", "slug"),
            Binding::scalar("tag_name", "name"),
        ];
        BINDINGS
    }

    fn assign(
        &mut self,
        field: &'static str,
        source: Source<'_, '_>,
        decoder: &Decoder,
    ) -> Result<()> {
        match field {
            "id" => self.id = decoder.scalar(field, &source)?,
            "slug" => self.slug = decoder.scalar(field, &source)?,
            "name" => self.name = decoder.scalar(field, &source)?,
            _ => {}
        }
        Ok(())
    }
}

/// One exported post, page, or attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Numeric post identifier.
    pub id: u64,
    /// URL-safe post name.
    pub name: String,
    pub title: String,
    /// Post author. Empty when the export omits it.
    pub author: String,
    pub link: String,
    /// Category and tag associations, in document order. WXR emits each
    /// association twice with different attribute completeness; both
    /// occurrences are kept verbatim.
    pub categories: Vec<ItemCategory>,
    /// Post body blocks, in document order.
    pub content: Vec<String>,
    /// Post type discriminator ("post", "page", attachments, ...). Open
    /// string: the source format defines types outside our control.
    pub post_type: String,
    /// Publication timestamp. `None` when the export omits it.
    pub pub_date: Option<WpTime>,
}

impl Item {
    /// Associations with the `category` domain.
    ///
    /// Derived view over [`categories`](Self::categories); the unified
    /// attribute-discriminated collection stays canonical.
    pub fn category_terms(&self) -> impl Iterator<Item = &ItemCategory> {
        self.categories
            .iter()
            .filter(|c| c.domain == DOMAIN_CATEGORY)
    }

    /// Associations with the `post_tag` domain.
    pub fn tag_terms(&self) -> impl Iterator<Item = &ItemCategory> {
        self.categories.iter().filter(|c| c.domain == DOMAIN_TAG)
    }
}

impl Decode for Item {
    const ELEMENT: &'static str = "item";

    fn bindings() -> &'static [Binding] {
        const BINDINGS: &[Binding] = &[
            Binding::scalar("post_id", "id"),
            Binding::scalar("post_name", "name"),
            Binding::scalar("title", "title"),
            Binding::scalar("creator", "author"),
            Binding::scalar("link", "link"),
            Binding::repeated_nested("category", "categories"),
            Binding::repeated_scalar("encoded", "content"),
            Binding::scalar("post_type", "post_type"),
            Binding::scalar("pubDate", "pub_date"),
        ];
        BINDINGS
    }

    fn assign(
        &mut self,
        field: &'static str,
        source: Source<'_, '_>,
        decoder: &Decoder,
    ) -> Result<()> {
        match field {
            "id" => self.id = decoder.scalar(field, &source)?,
            "name" => self.name = decoder.scalar(field, &source)?,
            "title" => self.title = decoder.scalar(field, &source)?,
            "author" => self.author = decoder.scalar(field, &source)?,
            "link" => self.link = decoder.scalar(field, &source)?,
            "categories" => self.categories.push(decoder.nested(field, &source)?),
            "content" => self.content.push(decoder.scalar(field, &source)?),
            "post_type" => self.post_type = decoder.scalar(field, &source)?,
            "pub_date" => self.pub_date = Some(decoder.scalar(field, &source)?),
            _ => {}
        }
        Ok(())
    }
}

/// One occurrence of a category-or-tag association on an item.
///
/// WXR emits the same logical association twice: once with only the
/// display name and once carrying the slug as well. Both occurrences
/// are decoded as-is, without deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    /// Association kind: [`DOMAIN_CATEGORY`], [`DOMAIN_TAG`], or any
    /// other domain the export defines.
    pub domain: String,
    /// URL-safe slug; empty on the name-only occurrence.
    pub slug: String,
    /// Display name, from the element's character data.
    pub name: String,
}

impl Decode for ItemCategory {
    const ELEMENT: &'static str = "category";

    fn bindings() -> &'static [Binding] {
        const BINDINGS: &[Binding] = &[
            Binding::attribute("domain", "domain"),
            Binding::attribute("nicename", "slug"),
            Binding::text("name"),
        ];
        BINDINGS
    }

    fn assign(
        &mut self,
        field: &'static str,
        source: Source<'_, '_>,
        decoder: &Decoder,
    ) -> Result<()> {
        match field {
            "domain" => self.domain = decoder.scalar(field, &source)?,
            "slug" => self.slug = decoder.scalar(field, &source)?,
            "name" => self.name = decoder.scalar(field, &source)?,
            _ => {}
        }
        Ok(())
    }
}
