/// Text helpers shared between display layers

/// Count-based singular/plural selection
/// Example: pluralize(1, "connection") -> "connection", pluralize(3, "connection") -> "connections"
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{}s", singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "connection"), "connections");
        assert_eq!(pluralize(1, "connection"), "connection");
        assert_eq!(pluralize(2, "connection"), "connections");
        assert_eq!(pluralize(17, "project"), "projects");
    }
}
