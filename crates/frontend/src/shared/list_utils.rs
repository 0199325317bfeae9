/// Утилиты списков: подсветка совпадений и поле поиска
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Задержка перед применением поискового запроса
const DEBOUNCE_MS: u32 = 250;

/// Byte ranges of case-insensitive matches of `query` in `text`
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    // Сравниваем посимвольно, чтобы не сбить байтовые смещения при смене регистра
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let hit = chars[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|((_, c), n)| c.to_lowercase().eq(std::iter::once(*n)));
        if hit {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map(|(pos, _)| *pos)
                .unwrap_or(text.len());
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-hit">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение запроса
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается после паузы ввода и при очистке
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    // Внешний сброс фильтров очищает поле
    Effect::new(move |_| {
        let external = value.get();
        if external.trim() != input_value.get_untracked().trim() {
            input_value.set(external);
        }
    });

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        // Dropping the previous Timeout cancels it
        let timeout = Timeout::new(DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Sous Chef", "chef"), vec![(5, 9)]);
        assert_eq!(match_ranges("Chef de chef", " CHEF "), vec![(0, 4), (8, 12)]);
        assert!(match_ranges("Store Manager", "").is_empty());
        assert!(match_ranges("Store Manager", "chef").is_empty());
    }

    #[test]
    fn test_match_ranges_multibyte() {
        let text = "Café Olaya";
        let ranges = match_ranges(text, "olaya");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "Olaya");
    }
}
