use pagesmith_model::{Document, Page};

/// Options for markup generation
#[derive(Debug, Clone)]
pub struct MarkupOptions {
    /// Pretty print with newlines and indentation
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: MarkupOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: MarkupOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Markup skeleton for `page_id` of `document`
///
/// A missing page produces a body with a single placeholder comment.
pub fn compile_to_markup(document: &Document, page_id: &str, options: MarkupOptions) -> String {
    let mut ctx = Context::new(options);
    let page = document.page(page_id);

    ctx.add_line("<!DOCTYPE html>");
    let lang = if document.metadata.language.is_empty() {
        "en"
    } else {
        document.metadata.language.as_str()
    };
    if document.settings.rtl {
        ctx.add_line(&format!("<html lang=\"{}\" dir=\"rtl\">", escape_html(lang)));
    } else {
        ctx.add_line(&format!("<html lang=\"{}\">", escape_html(lang)));
    }
    ctx.indent();

    compile_head(document, page, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    match page {
        Some(page) => compile_body(page, &mut ctx),
        None => ctx.add_line(&format!("<!-- page not found: {} -->", escape_comment(page_id))),
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(document: &Document, page: Option<&Page>, ctx: &mut Context) {
    let metadata = &document.metadata;

    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");

    let title = match page {
        Some(page) if !page.meta.title.is_empty() && page.meta.title != metadata.title => {
            format!("{} | {}", page.meta.title, metadata.title)
        }
        _ => metadata.title.clone(),
    };
    ctx.add_line(&format!("<title>{}</title>", escape_html(&title)));

    if !metadata.description.is_empty() {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&metadata.description)
        ));
    }
    if !metadata.author.is_empty() {
        ctx.add_line(&format!(
            "<meta name=\"author\" content=\"{}\">",
            escape_html(&metadata.author)
        ));
    }
    if let Some(page) = page.filter(|p| !p.meta.keywords.is_empty()) {
        ctx.add_line(&format!(
            "<meta name=\"keywords\" content=\"{}\">",
            escape_html(&page.meta.keywords.join(", "))
        ));
    }
    if !metadata.favicon.is_empty() {
        ctx.add_line(&format!(
            "<link rel=\"icon\" href=\"{}\">",
            escape_html(&metadata.favicon)
        ));
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_body(page: &Page, ctx: &mut Context) {
    let elements = page.visible_elements();

    if elements.is_empty() {
        ctx.add_line("<!-- empty page -->");
        return;
    }

    for element in elements {
        ctx.add_line(&format!(
            "<!-- {}: {} -->",
            element.element_type,
            escape_comment(&element.id)
        ));
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Comments cannot contain "--" or end in "-"
fn escape_comment(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        escaped.push(ch);
        if ch == '-' && matches!(chars.peek(), Some('-') | None) {
            escaped.push(' ');
        }
    }
    escaped
}
