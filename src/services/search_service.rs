use crate::models::User;

/// Filtra usuários por email, nome, sobrenome, cidade ou estado.
/// Busca case-insensitive por substring; texto vazio retorna a lista inteira.
pub fn filter_users(users: &[User], text: &str) -> Vec<User> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return users.to_vec();
    }

    users
        .iter()
        .filter(|user| matches(user, &needle))
        .cloned()
        .collect()
}

fn matches(user: &User, needle: &str) -> bool {
    [
        &user.email,
        &user.name.first,
        &user.name.last,
        &user.location.city,
        &user.location.state,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Índice do usuário com este email na lista filtrada
pub fn position_by_email(filtered: &[User], email: &str) -> Option<usize> {
    let email = email.trim();
    filtered
        .iter()
        .position(|user| user.email.eq_ignore_ascii_case(email))
}


#[cfg(test)]
mod tests {
    use super::fixtures::users;
    use super::*;

    fn emails(list: &[User]) -> Vec<&str> {
        list.iter().map(|u| u.email.as_str()).collect()
    }

    #[test]
    fn test_empty_text_returns_full_list() {
        let all = users();
        assert_eq!(filter_users(&all, ""), all);
        assert_eq!(filter_users(&all, "   "), all);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let all = users();
        let result = filter_users(&all, "HOP");
        assert_eq!(emails(&result), vec!["grace.hopper@example.com"]);
    }

    #[test]
    fn test_matches_each_field() {
        let all = users();
        // email
        assert_eq!(filter_users(&all, "alan.turing@").len(), 1);
        // first name
        assert_eq!(filter_users(&all, "linus").len(), 1);
        // last name
        assert_eq!(filter_users(&all, "lovelace").len(), 1);
        // city
        assert_eq!(filter_users(&all, "wilmslow").len(), 1);
        // state
        assert_eq!(filter_users(&all, "oregon").len(), 1);
    }

    /// Email sem relação com o nome: cada campo precisa casar sozinho
    fn user_with_email(first: &str, last: &str, city: &str, state: &str, email: &str) -> User {
        let mut user = fixtures::user(first, last, city, state);
        user.email = email.to_string();
        user
    }

    #[test]
    fn test_matches_each_field_independently() {
        let all = vec![
            user_with_email("Grace", "Hopper", "Arlington", "Virginia", "gh@example.com"),
            user_with_email("Alan", "Turing", "Wilmslow", "Cheshire", "at@example.com"),
        ];

        // first name
        assert_eq!(emails(&filter_users(&all, "gRACe")), vec!["gh@example.com"]);
        // last name
        assert_eq!(emails(&filter_users(&all, "HOPPER")), vec!["gh@example.com"]);
        // city
        assert_eq!(emails(&filter_users(&all, "wilmSLOW")), vec!["at@example.com"]);
        // state
        assert_eq!(emails(&filter_users(&all, "CHESHIRE")), vec!["at@example.com"]);
        // email
        assert_eq!(emails(&filter_users(&all, "AT@")), vec!["at@example.com"]);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let all = vec![
            user_with_email("Grace", "Hopper", "New York", "New York", "gh@example.com"),
            user_with_email("Alan", "Turing", "Wilmslow", "Cheshire", "at@example.com"),
        ];

        assert_eq!(filter_users(&all, " \t "), all);
        assert_eq!(emails(&filter_users(&all, "  york ")), vec!["gh@example.com"]);
    }

    #[test]
    fn test_preserves_order() {
        let all = users();
        let result = filter_users(&all, "a");
        assert_eq!(
            emails(&result),
            vec![
                "ada.lovelace@example.com",
                "grace.hopper@example.com",
                "alan.turing@example.com",
                "linus.torvalds@example.com",
            ]
        );
    }

    #[test]
    fn test_ignores_other_fields() {
        let all = users();
        // rua e telefone não participam da busca
        assert!(filter_users(&all, "elm st").is_empty());
        assert!(filter_users(&all, "867").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let all = users();
        let once = filter_users(&all, "or");
        let twice = filter_users(&all, "or");
        assert_eq!(once, twice);
        assert_eq!(filter_users(&once, "or"), once);
    }

    #[test]
    fn test_position_by_email() {
        let all = users();
        let filtered = filter_users(&all, "o");
        assert_eq!(position_by_email(&filtered, "LINUS.torvalds@example.com"), Some(3));
        assert_eq!(position_by_email(&filtered, "nobody@example.com"), None);
    }
}
