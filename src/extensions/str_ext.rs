pub trait Capitalized {
    fn capitalized(&self) -> String;
}

impl Capitalized for str {
    /// Uppercases the first letter of every space-separated word and
    /// lowercases the rest.
    fn capitalized(&self) -> String {
        self.split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn capitalized_uppercases_every_word() {
        assert_eq!("nevsky prospekt".capitalized(), "Nevsky Prospekt");
    }

    #[test]
    fn capitalized_lowercases_the_rest_of_a_word() {
        assert_eq!("UL. VOSSTANIYA 24".capitalized(), "Ul. Vosstaniya 24");
    }

    #[test]
    fn capitalized_keeps_an_empty_string_empty() {
        assert_eq!("".capitalized(), "");
    }
}
