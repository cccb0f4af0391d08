use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use log::debug;
use std::fmt;

/// Elements that never have content or an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text is emitted verbatim when serializing
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "xmp", "iframe", "noembed", "noframes"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    Doctype(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// A lenient HTML tree.
///
/// Unlike a spec-compliant tree builder this never invents elements: a page
/// without a `<body>` tag parses to a tree without a `body` element, and an
/// empty page parses to an empty tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup {
    nodes: Vec<Node>,
}

impl Markup {
    /// Parse markup of any quality. Never fails.
    pub fn parse(html: &str) -> Self {
        let mut input = BufferQueue::new();
        if !html.is_empty() {
            input.push_back(StrTendril::from_slice(html));
        }

        let mut tokenizer = Tokenizer::new(TreeCollector::default(), TokenizerOpts::default());
        let _ = tokenizer.feed(&mut input);
        tokenizer.end();

        let markup = tokenizer.sink.finish();
        debug!(
            "parsed {} bytes into {} top-level nodes",
            html.len(),
            markup.nodes.len()
        );
        markup
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All elements in document order
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            stack: self.nodes.iter().rev().collect(),
        }
    }

    /// First element with the given tag name, compared ASCII case-insensitively
    pub fn find(&self, tag: &str) -> Option<ElementRef<'_>> {
        self.elements()
            .find(|element| element.name().eq_ignore_ascii_case(tag))
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            write_node(&mut out, node, false);
        }
        out
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    element: &'a Element,
}

impl<'a> ElementRef<'a> {
    pub fn name(&self) -> &'a str {
        &self.element.name
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of all descendants
    pub fn text(&self) -> String {
        let mut text = String::new();
        collect_text(&self.element.children, &mut text);
        text
    }

    pub fn children(&self) -> &'a [Node] {
        &self.element.children
    }
}

/// Pre-order iterator over the elements of a [`Markup`]
pub struct Elements<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Node::Element(element) = node {
                self.stack.extend(element.children.iter().rev());
                return Some(ElementRef { element });
            }
        }
        None
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
            Node::Comment(_) | Node::Doctype(_) => {}
        }
    }
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn write_node(out: &mut String, node: &Node, raw_text: bool) {
    match node {
        Node::Doctype(name) => {
            out.push_str("<!DOCTYPE");
            if !name.is_empty() {
                out.push(' ');
                out.push_str(name);
            }
            out.push('>');
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Text(text) if raw_text => out.push_str(text),
        Node::Text(text) => escape_into(out, text, false),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.name);
            for (key, value) in &element.attrs {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                escape_into(out, value, true);
                out.push('"');
            }

            if is_void(&element.name) {
                out.push_str("/>");
                return;
            }
            out.push('>');

            let raw = RAW_TEXT_ELEMENTS.contains(&element.name.as_str());
            for child in &element.children {
                write_node(out, child, raw);
            }

            out.push_str("</");
            out.push_str(&element.name);
            out.push('>');
        }
    }
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

/// Builds a [`Markup`] straight from tokenizer output, keeping a stack of open elements.
#[derive(Default)]
struct TreeCollector {
    root: Vec<Node>,
    open: Vec<Element>,
}

impl TreeCollector {
    fn current_children(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(element) => &mut element.children,
            None => &mut self.root,
        }
    }

    fn push_text(&mut self, text: &str) {
        let children = self.current_children();
        if let Some(Node::Text(previous)) = children.last_mut() {
            previous.push_str(text);
        } else {
            children.push(Node::Text(text.to_string()));
        }
    }

    fn close_innermost(&mut self) {
        if let Some(element) = self.open.pop() {
            self.current_children().push(Node::Element(element));
        }
    }

    fn start_tag(&mut self, tag: Tag) -> TokenSinkResult<()> {
        let element = Element {
            name: tag.name.to_string(),
            attrs: tag
                .attrs
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            children: Vec::new(),
        };

        if tag.self_closing || is_void(&element.name) {
            self.current_children().push(Node::Element(element));
            return TokenSinkResult::Continue;
        }

        let content = match element.name.as_str() {
            "script" => Some(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
            "title" | "textarea" => Some(RawKind::Rcdata),
            _ => None,
        };
        self.open.push(element);

        match content {
            Some(kind) => TokenSinkResult::RawData(kind),
            None => TokenSinkResult::Continue,
        }
    }

    fn end_tag(&mut self, tag: Tag) {
        // Stray end tags are dropped, unclosed inner elements close with their parent
        let Some(position) = self.open.iter().rposition(|open| *open.name == *tag.name) else {
            debug!("ignoring stray end tag </{}>", tag.name);
            return;
        };
        while self.open.len() > position {
            self.close_innermost();
        }
    }

    fn finish(mut self) -> Markup {
        while !self.open.is_empty() {
            self.close_innermost();
        }
        Markup { nodes: self.root }
    }
}

impl TokenSink for TreeCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.start_tag(tag),
                TagKind::EndTag => self.end_tag(tag),
            },
            Token::CharacterTokens(text) => self.push_text(&text),
            Token::CommentToken(comment) => {
                self.current_children().push(Node::Comment(comment.to_string()))
            }
            Token::DoctypeToken(doctype) => {
                let name = doctype.name.map(|name| name.to_string()).unwrap_or_default();
                self.current_children().push(Node::Doctype(name));
            }
            Token::ParseError(error) => debug!("html parse error: {}", error),
            Token::NullCharacterToken | Token::EOFToken => {}
        }
        TokenSinkResult::Continue
    }
}
