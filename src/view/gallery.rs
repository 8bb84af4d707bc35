use crate::models::User;
use crate::utils::escape_html;
use crate::view::search_query;

pub const NO_RESULTS_MESSAGE: &str = "No results";

/// Conteúdo do container da galeria: um card por usuário, na ordem recebida
pub fn render_gallery(users: &[User], query: &str) -> String {
    if users.is_empty() {
        return format!(r#"<h3 class="no-results">{}</h3>"#, NO_RESULTS_MESSAGE);
    }

    users
        .iter()
        .map(|user| render_card(user, query))
        .collect::<Vec<_>>()
        .join("")
}

/// O link do card carrega o email exibido; a seleção é resolvida
/// contra a lista filtrada atual em `/select`
pub fn render_card(user: &User, query: &str) -> String {
    let mut href = format!("/select?email={}", urlencoding::encode(&user.email));
    let search = search_query(query);
    if !search.is_empty() {
        href.push('&');
        href.push_str(&search);
    }

    format!(
        r#"
            <div class="card" data-email="{email}">
                <a class="card-link" href="{href}">
                    <div class="card-img-container">
                        <img class="card-img" src="{picture}" alt="profile picture">
                    </div>
                    <div class="card-info-container">
                        <h3 class="card-name cap">{name}</h3>
                        <p class="card-text">{email}</p>
                        <p class="card-text cap">{city}, {state}</p>
                    </div>
                </a>
            </div>"#,
        email = escape_html(&user.email),
        href = escape_html(&href),
        picture = escape_html(&user.picture.large),
        name = escape_html(&user.full_name()),
        city = escape_html(&user.location.city),
        state = escape_html(&user.location.state),
    )
}

#[cfg(test)]
pub(crate) fn count_cards(html: &str) -> usize {
    html.matches(r#"<div class="card" "#).count()
}
