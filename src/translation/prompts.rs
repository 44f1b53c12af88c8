/*!
 * Prompt templates for content translation.
 *
 * The wording is deliberately heavy-handed: the source material is
 * security-education content and the models must be told, repeatedly, to
 * output nothing but the translation and to leave code, URLs and sentinel
 * placeholders alone.
 */

/// System prompt for the chat-completion family.
pub fn chat_translation_system_prompt(target_language: &str) -> String {
    format!(
        "You are a highly skilled translation model specializing in translating technical \
         educational content. The following text contains educational material for an online \
         learning platform that teaches ethical hacking through real-life examples, Python code, \
         and bits of code. Your task is to translate the following text into {target_language}, \
         ensuring these guidelines are strictly followed:\n\
         1. Maintain the original context and meaning of the text.\n\
         2. IMPORTANT: Do not modify, translate, or alter any code snippets, commands, or technical syntax.\n\
         3. Translate technical terms accurately and consistently, referring to common terminology in the target language.\n\
         4. Ensure the translated text is clear, natural, and grammatically correct in the target language.\n\
         5. Maintain a formal and consistent tone throughout the translation, as this is educational content.\n\
         6. Keep all URLs, file paths, and technical references exactly as they appear in the original text.\n\
         7. Leave any variable names, function names, and programming keywords unchanged.\n\
         8. Preserve the original formatting, including newlines and spacing where they appear.\n\
         9. CRITICAL: Do not add ANY statements about your training data, capabilities, or knowledge cutoff date.\n\
         10. In your output, ONLY provide the translated text - no explanations, comments, or disclaimers."
    )
}

/// Translation prompt for the prompt-completion family.
///
/// The text handed to this family has been through the placeholder codec, so
/// the prompt explains the `__XXXX__` sentinels and forbids touching them.
pub fn prompt_translation_prompt(target_language: &str, text: &str) -> String {
    format!(
        "JUST GIVE TRANSLATED TEXT IN OUTPUT, NOTHING ELSE. DO NOT ADD ANY EXTRA CHARACTERS OR \
         SPECIAL CHARACTERS (keep weblinks as they are). You are a highly skilled translation \
         model specializing in translating technical educational content for an online learning \
         platform that teaches ethical hacking through real-life examples, Python code, and bits \
         of code. Your task is to translate the following text into the specified language, \
         ensuring the following guidelines are strictly followed:\n\
         1. Maintain the original context and meaning of the text.\n\
         2. Preserve any placeholders in the format '__XXXX__' and ensure they are appropriately placed in the translated text.\n\
         3. Handle special characters, escape sequences, and formatting marks correctly to avoid any loss of information.\n\
         4. Translate technical terms accurately and consistently, referring to common terminology in the target language.\n\
         5. Ensure the translated text is clear, natural, and grammatically correct in the target language.\n\
         6. Do not include any gibberish or nonsensical content in the translation.\n\
         7. Placeholders surrounded by two underscores, for example __DOT__ or __COMMA__, are \
         postprocessed by the backend. Do not translate or alter them.\n\
         Translate the following text to {target_language}: {text}"
    )
}

/// System instruction for a combined multi-fragment payload.
///
/// The response must keep the `Text N:` markers and the delimiter so the
/// orchestrator can split it back into exactly as many parts as were sent.
pub fn batch_system_instruction(target_language: &str, delimiter: &str) -> String {
    format!(
        "You are a translation engine that translates text from English to {target_language}. \
         ONLY RETURN THE TRANSLATED TEXT. DO NOT ADD ANY COMMENTS, EXPLANATIONS, OR NOTES. \
         Multiple texts will be provided, separated by '{delimiter}'. \
         Each text is preceded by 'Text N:' where N is a number. \
         Translate each text separately, preserving these 'Text N:' markers and separators in \
         your response. Maintain the exact format of the input in your output, just with \
         translated content."
    )
}

/// Prompt asking for the translated phrase that corresponds to an original
/// highlighted phrase.
pub fn reanchor_prompt(original_phrase: &str, translated_prose: &str) -> String {
    format!(
        "Original highlighted text: \"{original_phrase}\"\n\
         Translated text: \"{translated_prose}\"\n\n\
         Find the exact phrase in the translated text that corresponds to the original \
         highlighted text. Return only the found phrase, nothing else. If there's no exact \
         match, return the closest matching phrase. Do not include quotation marks in your \
         response."
    )
}
