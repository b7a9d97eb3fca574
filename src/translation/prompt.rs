pub const TO_PIDGIN_TEMPLATE: &str = "You are a Nigerian Pidgin expert and native speaker.

Translate this exact English text to natural, authentic Nigerian Pidgin:

\"{text}\"

IMPORTANT RULES:
1. Use natural Nigerian Pidgin expressions (e.g., \"wetin dey happen\" not \"what is happening\")
2. Maintain the original meaning and tone
3. Use common Pidgin words: \"dey\", \"na\", \"wetin\", \"abi\", \"shey\", \"no be\", \"e don\", etc.
4. Keep it conversational and natural (how Nigerians actually speak)
5. Don't explain - just provide the Pidgin translation
6. If the text is already Pidgin, return it unchanged

Translation:";

pub const TO_ENGLISH_TEMPLATE: &str = "You are a Nigerian Pidgin expert.

Translate this Nigerian Pidgin text to clear, natural English:

\"{text}\"

RULES:
1. Provide clear, fluent English translation
2. Maintain the original meaning and tone
3. Don't explain - just provide the English translation
4. If already English, return it unchanged

Translation:";

pub const DETECT_TEMPLATE: &str = "Analyze this text and determine if it's:
1. Nigerian Pidgin
2. English
3. Mixed (both Pidgin and English)

Text: \"{text}\"

Reply with ONLY ONE WORD: pidgin, english, or mixed";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(template: &str, text: &str) -> String {
    // {text} is a placeholder for string replacement, not a format argument
    template.replace("{text}", text)
}
