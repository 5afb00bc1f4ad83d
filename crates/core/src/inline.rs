//! Inline nodes and the reference construction hook.
//!
//! When the inline-resolution phase matches a reference-style link or
//! image against a definition, it asks the definition's optional
//! [`InlineBuilder`] for a node first and falls back to
//! [`default_inline`] when the hook is absent or declines. The hook is a
//! pure construction strategy: it performs no parsing and cannot mutate
//! the definition (it only ever sees a shared borrow).

use crate::definition::LinkReferenceDefinition;

/// A minimal inline node, just enough structure for reference resolution.
///
/// Rendering inline nodes to any output format is out of scope here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text content.
    Text(String),
    /// A link node.
    Link {
        /// Link target.
        destination: String,
        /// Optional title.
        title: Option<String>,
        /// Display content.
        children: Vec<Inline>,
    },
    /// An image node.
    Image {
        /// Image source.
        destination: String,
        /// Optional title.
        title: Option<String>,
        /// Alternative content.
        children: Vec<Inline>,
    },
}

/// State the inline-resolution phase threads into construction.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext {
    /// Whether the matching reference is an image form (`![...]`) rather
    /// than a link.
    pub is_image: bool,
}

impl ResolutionContext {
    /// Context for resolving a reference link.
    pub fn link() -> Self {
        Self { is_image: false }
    }

    /// Context for resolving a reference image.
    pub fn image() -> Self {
        Self { is_image: true }
    }
}

/// Strategy invoked when a reference matches a definition.
///
/// `child` carries already-parsed display content for full reference
/// forms (`[text][label]`); it is `None` for shortcut and collapsed forms,
/// which reuse the definition's own label as display text. Returning
/// `None` tells the caller to apply [`default_inline`] instead.
pub trait InlineBuilder {
    /// Build the inline node for a matched reference, or decline.
    fn build_inline(
        &self,
        ctx: &mut ResolutionContext,
        definition: &LinkReferenceDefinition,
        child: Option<Inline>,
    ) -> Option<Inline>;
}

impl<F> InlineBuilder for F
where
    F: Fn(&mut ResolutionContext, &LinkReferenceDefinition, Option<Inline>) -> Option<Inline>,
{
    fn build_inline(
        &self,
        ctx: &mut ResolutionContext,
        definition: &LinkReferenceDefinition,
        child: Option<Inline>,
    ) -> Option<Inline> {
        (self)(ctx, definition, child)
    }
}

/// Default construction policy: a standard link or image node built from
/// the definition's destination and title.
pub fn default_inline(
    ctx: &ResolutionContext,
    definition: &LinkReferenceDefinition,
    child: Option<Inline>,
) -> Inline {
    let children = match child {
        Some(node) => vec![node],
        None => vec![Inline::Text(definition.label.clone())],
    };
    if ctx.is_image {
        Inline::Image {
            destination: definition.destination.clone(),
            title: definition.title.clone(),
            children,
        }
    } else {
        Inline::Link {
            destination: definition.destination.clone(),
            title: definition.title.clone(),
            children,
        }
    }
}

/// Build the inline node for a reference that matched `definition`:
/// consult the definition's builder first, fall back to [`default_inline`]
/// when it is absent or declines.
pub fn build_reference_inline(
    ctx: &mut ResolutionContext,
    definition: &LinkReferenceDefinition,
    child: Option<Inline>,
) -> Inline {
    if let Some(builder) = definition.inline_builder.as_deref()
        && let Some(node) = builder.build_inline(ctx, definition, child.clone())
    {
        return node;
    }
    default_inline(ctx, definition, child)
}
