/// System instruction asking for `count` FAQs about `city_name` as a bare JSON
/// array of `{"question", "answer"}` objects.
pub fn build_system_prompt(city_name: &str, count: usize) -> String {
    format!(
        "You are a chat bot that generates {count} FAQs about {city}.\n\
         Generate exactly {count} question and answer objects about {city} and respond ONLY with \
         a JSON array in the following format, with no surrounding text or markdown:\n\
         [{{\n  \"question\": \"What is {city} known for?\",\n  \"answer\": \"{city} is known for...\"\n}}, ...]",
        count = count,
        city = city_name,
    )
}
