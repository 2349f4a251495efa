use std::ops::RangeInclusive;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ipsum::{Format, TextGenerator, Units};

const WORDS: &[&str] = &[
    "almond", "apple", "artichoke", "arugula", "asparagus", "aubergine", "avocado", "banana",
    "barley", "basil", "beans", "beetroot", "blueberry", "broccoli", "buckwheat",
    "cabbage", "cacao", "capers", "cardamom", "carrot", "cashew", "cauliflower", "celery",
    "chard", "cherry", "chickpea", "chili", "cilantro", "cinnamon", "coconut", "coriander",
    "courgette", "cranberry", "cucumber", "cumin", "dates", "dill", "edamame", "falafel",
    "fennel", "fig", "garlic", "ginger", "grapefruit", "hazelnut", "hemp", "hummus", "jackfruit",
    "kale", "kimchi", "kohlrabi", "leek", "lemon", "lentils", "lettuce", "lime", "mango",
    "maple", "miso", "mushroom", "nutmeg", "oat", "okra", "olive", "onion", "orange", "oregano",
    "papaya", "paprika", "parsley", "parsnip", "peach", "peanut", "pear", "pecan", "pepper",
    "pistachio", "plum", "pomegranate", "potato", "pumpkin", "quinoa", "radish", "raspberry",
    "rhubarb", "rice", "rosemary", "saffron", "seitan", "sesame", "shallot", "sorrel", "soy",
    "spinach", "squash", "sriracha", "strawberry", "sunflower", "tahini", "tamari", "tempeh",
    "thyme", "tofu", "tomato", "turmeric", "turnip", "vanilla", "walnut", "wasabi", "watercress",
    "yam", "zucchini",
];

/// Word-list generator shaped like classic lorem ipsum: sentences of a few words each,
/// paragraphs of a few sentences each.
#[derive(Clone, Debug)]
pub struct VeganIpsum {
    words_per_sentence: RangeInclusive<usize>,
    sentences_per_paragraph: RangeInclusive<usize>,
}

impl Default for VeganIpsum {
    fn default() -> Self {
        Self {
            words_per_sentence: 4..=16,
            sentences_per_paragraph: 3..=7,
        }
    }
}

impl VeganIpsum {
    pub fn generate_with<R: Rng>(
        &self,
        rng: &mut R,
        count: u32,
        units: Units,
        format: Format,
    ) -> String {
        let count = count as usize;
        match (units, format) {
            (Units::Words, Format::Plain) => self.words(rng, count),
            (Units::Words, Format::Html) => wrap_paragraph(&self.words(rng, count)),
            (Units::Sentences, Format::Plain) => self.sentences(rng, count),
            (Units::Sentences, Format::Html) => wrap_paragraph(&self.sentences(rng, count)),
            (Units::Paragraphs, Format::Plain) => (0..count)
                .map(|_| self.paragraph(rng))
                .collect::<Vec<_>>()
                .join("\n"),
            (Units::Paragraphs, Format::Html) => (0..count)
                .map(|_| wrap_paragraph(&self.paragraph(rng)))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn words<R: Rng>(&self, rng: &mut R, count: usize) -> String {
        (0..count)
            .filter_map(|_| WORDS.choose(rng).copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sentence<R: Rng>(&self, rng: &mut R) -> String {
        let length = rng.gen_range(self.words_per_sentence.clone());
        let mut sentence = capitalize(&self.words(rng, length));
        sentence.push('.');
        sentence
    }

    fn sentences<R: Rng>(&self, rng: &mut R, count: usize) -> String {
        (0..count)
            .map(|_| self.sentence(rng))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn paragraph<R: Rng>(&self, rng: &mut R) -> String {
        let length = rng.gen_range(self.sentences_per_paragraph.clone());
        self.sentences(rng, length)
    }
}

impl TextGenerator for VeganIpsum {
    #[tracing::instrument(level = "trace", skip(self))]
    fn generate(&self, count: u32, units: Units, format: &str) -> Result<String> {
        let format = format.parse::<Format>()?;
        Ok(self.generate_with(&mut rand::thread_rng(), count, units, format))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn wrap_paragraph(text: &str) -> String {
    format!("<p>{}</p>", text)
}
