/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use biblatex::{Chunk, Entry, Spanned};

use super::{Bibliography, Person, Reference};

/// Parse BibTeX/BibLaTeX source into a [`Bibliography`], keeping source order.
pub fn parse_bibtex(src: &str) -> Result<Bibliography, biblatex::ParseError> {
    let parsed = biblatex::Bibliography::parse(src)?;
    let mut bib = Bibliography::new();
    for entry in parsed.iter() {
        bib.insert(entry.key.clone(), Reference::from_biblatex(entry));
    }
    Ok(bib)
}

fn chunks_to_string(chunks: &[Spanned<Chunk>]) -> String {
    chunks
        .iter()
        .map(|c| match &c.v {
            Chunk::Normal(s) | Chunk::Verbatim(s) => s.clone(),
            Chunk::Math(s) => format!("${}$", s),
        })
        .collect()
}

impl Reference {
    pub fn from_biblatex(entry: &Entry) -> Self {
        let fields = entry
            .fields
            .iter()
            .map(|(name, value)| (name.to_lowercase(), chunks_to_string(value)))
            .collect();

        let authors = entry
            .author()
            .map(|persons| persons.iter().map(Person::from_biblatex).collect())
            .unwrap_or_default();

        Reference {
            id: entry.key.clone(),
            entry_type: entry.entry_type.to_string().to_lowercase(),
            fields,
            authors,
        }
    }
}

impl Person {
    fn from_biblatex(person: &biblatex::Person) -> Self {
        Person {
            family: person.name.clone(),
            given: person.given_name.clone(),
            prefix: person.prefix.clone(),
            suffix: person.suffix.clone(),
        }
    }
}
