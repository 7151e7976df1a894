use super::Clause;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Word(String),
    Quoted(&'a str),
}

/// Command text split into lowercased bare words and bound clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ScannedCommand<'a> {
    words: Vec<String>,
    role: Option<&'a str>,
    permission: Option<&'a str>,
}

impl<'a> ScannedCommand<'a> {
    pub(super) fn scan(text: &'a str) -> Self {
        let mut words = Vec::new();
        let mut role = None;
        let mut permission = None;
        let mut pending: Option<Clause> = None;

        for token in tokenize(text) {
            match token {
                Token::Word(word) => {
                    if let Some(clause) = Clause::ALL
                        .into_iter()
                        .find(|clause| keyword_matches(word.as_str(), clause.keyword()))
                    {
                        pending = Some(clause);
                    }
                    words.push(word);
                }
                Token::Quoted(span) => {
                    let Some(clause) = pending.take() else {
                        continue;
                    };
                    if span.trim().is_empty() {
                        continue;
                    }

                    let slot = match clause {
                        Clause::Role => &mut role,
                        Clause::Permission => &mut permission,
                    };
                    if slot.is_none() {
                        *slot = Some(span);
                    }
                }
            }
        }

        Self {
            words,
            role,
            permission,
        }
    }

    pub(super) fn has_keyword(&self, keyword: &str) -> bool {
        self.words
            .iter()
            .any(|word| keyword_matches(word.as_str(), keyword))
    }

    pub(super) fn clause(&self, clause: Clause) -> Option<&'a str> {
        match clause {
            Clause::Role => self.role,
            Clause::Permission => self.permission,
        }
    }
}

/// A bare word matches a keyword exactly or in its plural form.
fn keyword_matches(word: &str, keyword: &str) -> bool {
    word == keyword || word.strip_suffix('s') == Some(keyword)
}

fn is_quote(character: char) -> bool {
    character == '"' || character == '\''
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut previous: Option<char> = None;
    let mut characters = text.char_indices().peekable();

    while let Some((index, character)) = characters.next() {
        // An apostrophe inside a word (`role's`) does not open a quoted span.
        let inside_word = character == '\'' && previous.is_some_and(char::is_alphanumeric);
        let opens_quote = is_quote(character) && !inside_word;
        if opens_quote {
            let span_start = index + character.len_utf8();
            if let Some(length) = text[span_start..].find(character) {
                flush_word(text, &mut word_start, index, &mut tokens);
                let span_end = span_start + length;
                tokens.push(Token::Quoted(&text[span_start..span_end]));

                while characters
                    .peek()
                    .is_some_and(|(next_index, _)| *next_index <= span_end)
                {
                    characters.next();
                }
                previous = Some(character);
                continue;
            }
        }

        let is_word_character = character.is_alphanumeric()
            || character == '_'
            || character == '-'
            || inside_word;

        if is_word_character {
            word_start.get_or_insert(index);
        } else {
            flush_word(text, &mut word_start, index, &mut tokens);
        }
        previous = Some(character);
    }

    flush_word(text, &mut word_start, text.len(), &mut tokens);
    tokens
}

fn flush_word<'a>(
    text: &'a str,
    word_start: &mut Option<usize>,
    end: usize,
    tokens: &mut Vec<Token<'a>>,
) {
    if let Some(start) = word_start.take() {
        tokens.push(Token::Word(text[start..end].to_lowercase()));
    }
}
