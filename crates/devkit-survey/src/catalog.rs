/// Identifier of the Happiness Tracking Survey.
pub const HATS_ID: &str = "hats";

const HATS_URL: &str = "https://forms.gle/BMTbGQXLWSdn7vEs6";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    pub id: &'static str,
    pub prompt_text: &'static str,
    pub url: &'static str,
}

impl Survey {
    /// Prompt line shown after a command finishes.
    pub fn prompt(&self) -> String {
        format!("{}: run 'devkit survey --id {}'\n", self.prompt_text, self.id)
    }
}

static SURVEYS: &[Survey] = &[Survey {
    id: HATS_ID,
    prompt_text: "Help improve devkit with our 2-minute anonymous survey",
    url: HATS_URL,
}];

pub fn get_survey(id: &str) -> Option<&'static Survey> {
    SURVEYS.iter().find(|s| s.id == id)
}

pub fn valid_ids() -> Vec<&'static str> {
    SURVEYS.iter().map(|s| s.id).collect()
}

/// The survey advertised by the post-command prompt.
pub fn hats() -> &'static Survey {
    &SURVEYS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_hats_by_id() {
        let survey = get_survey("hats").unwrap();
        assert_eq!(survey.url, HATS_URL);
        assert_eq!(hats(), survey);
    }

    #[test]
    fn unknown_id_is_absent() {
        assert!(get_survey("nps").is_none());
        assert!(get_survey("").is_none());
    }

    #[test]
    fn valid_ids_lists_every_entry() {
        assert_eq!(valid_ids(), vec!["hats"]);
    }

    #[test]
    fn prompt_names_the_command() {
        let prompt = hats().prompt();
        assert!(prompt.starts_with("Help improve devkit with our 2-minute anonymous survey: "));
        assert!(prompt.ends_with("run 'devkit survey --id hats'\n"));
    }
}
