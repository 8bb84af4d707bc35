use crate::models::User;
use crate::utils::{escape_html, format_birthday, format_phone};
use crate::view::with_search;

/// Navegação do modal sobre a lista filtrada atual.
/// Construído a cada requisição a partir da lista recalculada.
#[derive(Debug, Clone)]
pub struct ModalNavigator<'a> {
    filtered: &'a [User],
    index: usize,
}

impl<'a> ModalNavigator<'a> {
    pub fn open(filtered: &'a [User], index: usize) -> Option<Self> {
        if index < filtered.len() {
            Some(Self { filtered, index })
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn user(&self) -> &'a User {
        &self.filtered[self.index]
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.filtered.len()
    }

    /// No índice 0 não faz nada
    pub fn prev(self) -> Self {
        if self.has_prev() {
            Self { index: self.index - 1, ..self }
        } else {
            self
        }
    }

    /// No último índice não faz nada
    pub fn next(self) -> Self {
        if self.has_next() {
            Self { index: self.index + 1, ..self }
        } else {
            self
        }
    }

    pub fn render(&self, query: &str) -> String {
        let user = self.user();
        let location = &user.location;

        let address = format!(
            "{} {}, {}, {} {}",
            location.street.number,
            location.street.name,
            location.city,
            location.state,
            location.postcode
        );

        format!(
            r#"
            <div class="modal-container">
                <div class="modal">
                    <a class="modal-close-btn" id="modal-close-btn" href="{close}"><strong>X</strong></a>
                    <div class="modal-info-container">
                        <img class="modal-img" src="{picture}" alt="profile picture">
                        <h3 id="name" class="modal-name cap">{name}</h3>
                        <p class="modal-text">{email}</p>
                        <p class="modal-text cap">{city}</p>
                        <hr>
                        <p class="modal-text">{phone}</p>
                        <p class="modal-text">{address}</p>
                        <p class="modal-text">Birthday: {birthday}</p>
                    </div>
                </div>
                <div class="modal-btn-container">
                    {prev}
                    {next}
                </div>
            </div>"#,
            close = escape_html(&with_search("/", query)),
            picture = escape_html(&user.picture.large),
            name = escape_html(&user.full_name()),
            email = escape_html(&user.email),
            city = escape_html(&location.city),
            phone = escape_html(&format_phone(&user.phone)),
            address = escape_html(&address),
            birthday = format_birthday(&user.dob.date),
            prev = self.control("prev", "Prev", self.has_prev(), query),
            next = self.control("next", "Next", self.has_next(), query),
        )
    }

    fn control(&self, direction: &str, label: &str, enabled: bool, query: &str) -> String {
        if enabled {
            let href = with_search(&format!("/users/{}/{}", self.index, direction), query);
            format!(
                r#"<a class="modal-{dir} btn" id="modal-{dir}" href="{href}">{label}</a>"#,
                dir = direction,
                href = escape_html(&href),
                label = label,
            )
        } else {
            format!(
                r#"<button type="button" class="modal-{dir} btn" id="modal-{dir}" disabled>{label}</button>"#,
                dir = direction,
                label = label,
            )
        }
    }
}
