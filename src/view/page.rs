use crate::utils::escape_html;

pub const LOAD_ERROR_MESSAGE: &str = "Something went wrong!";

/// Estado da página: conteúdo da galeria e modal opcional
pub struct PageView<'a> {
    pub query: &'a str,
    pub gallery: String,
    pub modal: Option<String>,
    pub notice: Option<String>,
}

impl<'a> PageView<'a> {
    pub fn gallery(query: &'a str, gallery: String) -> Self {
        Self {
            query,
            gallery,
            modal: None,
            notice: None,
        }
    }

    /// Galeria substituída pela mensagem estática de erro; nenhum card
    pub fn load_error(query: &'a str) -> Self {
        Self::gallery(query, format!("<h2>{}</h2>", LOAD_ERROR_MESSAGE))
    }

    pub fn with_modal(mut self, modal: String) -> Self {
        self.modal = Some(modal);
        self
    }

    pub fn with_notice(mut self, notice: &str) -> Self {
        self.notice = Some(notice.to_string());
        self
    }

    pub fn render(&self) -> String {
        let notice = self
            .notice
            .as_deref()
            .map(|n| format!(r#"<p class="notice">{}</p>"#, escape_html(n)))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Public API Requests</title>
</head>
<body>
    <header>
        <div class="header-inner-container">
            <div class="header-text-container">
                <h1>AWESOME STARTUP EMPLOYEE DIRECTORY</h1>
            </div>
            <div class="search-container">
                <form action="/" method="get">
                    <input type="search" id="search-input" class="search-input" name="q" placeholder="Search..." value="{query}">
                    <input type="submit" value="&#x1F50D;" id="search-submit" class="search-submit">
                </form>
            </div>
        </div>
    </header>
    {notice}
    <div id="gallery" class="gallery">{gallery}
    </div>{modal}
</body>
</html>
"#,
            query = escape_html(self.query),
            notice = notice,
            gallery = self.gallery,
            modal = self.modal.as_deref().unwrap_or(""),
        )
    }
}
