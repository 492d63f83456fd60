use sajulotto_core::profile::{BirthProfile, BirthTime, CalendarType, Gender, YEAR_MIN};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::LottoBall;
use crate::dom;

#[derive(Properties, PartialEq, Clone)]
pub struct IdleViewProps {
    /// Prefill from the previous attempt, if any.
    pub initial: BirthProfile,
    pub preview: Vec<u8>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<BirthProfile>,
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
}

#[function_component(IdleView)]
pub fn idle_view(props: &IdleViewProps) -> Html {
    let name = use_state(|| props.initial.name.clone());
    let year = use_state(|| props.initial.year);
    let month = use_state(|| props.initial.month);
    let day = use_state(|| props.initial.day);
    let birth_time = use_state(|| props.initial.birth_time);
    let gender = use_state(|| props.initial.gender);
    let calendar = use_state(|| props.initial.calendar);

    let on_name = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                name.set(input.value());
            }
        })
    };
    let on_year = {
        let year = year.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event).and_then(|v| v.parse().ok()) {
                year.set(value);
            }
        })
    };
    let on_month = {
        let month = month.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event).and_then(|v| v.parse().ok()) {
                month.set(value);
            }
        })
    };
    let on_day = {
        let day = day.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event).and_then(|v| v.parse().ok()) {
                day.set(value);
            }
        })
    };
    let on_birth_time = {
        let birth_time = birth_time.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event).and_then(|v| v.parse().ok()) {
                birth_time.set(value);
            }
        })
    };
    let on_submit = {
        let (name, year, month, day) = (name.clone(), year.clone(), month.clone(), day.clone());
        let (birth_time, gender, calendar) =
            (birth_time.clone(), gender.clone(), calendar.clone());
        let on = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on.emit(BirthProfile {
                name: (*name).clone(),
                year: *year,
                month: *month,
                day: *day,
                birth_time: *birth_time,
                gender: *gender,
                calendar: *calendar,
            });
        })
    };

    let calendar_button = |kind: CalendarType, label: &str| {
        let calendar_state = calendar.clone();
        let selected = *calendar == kind;
        let onclick = Callback::from(move |_| calendar_state.set(kind));
        html! {
            <button type="button"
                class={classes!("choice-btn", selected.then_some("selected"))}
                {onclick}>
                { label }
            </button>
        }
    };
    let gender_button = |kind: Gender, label: &str| {
        let gender_state = gender.clone();
        let selected = *gender == kind;
        let onclick = Callback::from(move |_| gender_state.set(kind));
        html! {
            <button type="button"
                class={classes!("choice-btn", selected.then_some("selected"))}
                {onclick}>
                { label }
            </button>
        }
    };

    let years: Vec<u16> = (YEAR_MIN..=dom::current_year()).rev().collect();

    html! {
        <div class="idle-view">
            <div class="hero">
                <p class="hero-kicker">{ "Premium 2026 Destiny AI" }</p>
                <h2 class="hero-title">
                    { "When the fire-horse year opens the sky," }<br />
                    <span class="hero-accent">{ "these numbers are yours to seize" }</span>
                </h2>
            </div>

            <div class="preview-drum">
                { for props.preview.iter().map(|&n| html! {
                    <LottoBall number={n} generating={true} />
                }) }
            </div>

            <form class="birth-form" onsubmit={on_submit}>
                <label class="form-section">
                    <span class="form-heading">{ "🖋️ Name to analyze" }</span>
                    <input type="text"
                        placeholder="Enter your name"
                        value={(*name).clone()}
                        oninput={on_name} />
                </label>
                if let Some(error) = &props.error {
                    <p class="form-error">{ error.clone() }</p>
                }

                <div class="form-section">
                    <span class="form-heading">{ "📅 Birth chart details" }</span>
                    <div class="choice-row">
                        { calendar_button(CalendarType::Solar, "Solar") }
                        { calendar_button(CalendarType::LunarPlain, "Lunar (plain)") }
                        { calendar_button(CalendarType::LunarLeap, "Lunar (leap)") }
                    </div>
                    <div class="date-row">
                        <select onchange={on_year}>
                            { for years.iter().map(|&y| html! {
                                <option value={y.to_string()} selected={*year == y}>
                                    { format!("{y}") }
                                </option>
                            }) }
                        </select>
                        <select onchange={on_month}>
                            { for (1..=12u8).map(|m| html! {
                                <option value={m.to_string()} selected={*month == m}>
                                    { format!("{m}") }
                                </option>
                            }) }
                        </select>
                        <select onchange={on_day}>
                            { for (1..=31u8).map(|d| html! {
                                <option value={d.to_string()} selected={*day == d}>
                                    { format!("{d}") }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="time-gender-row">
                        <select onchange={on_birth_time}>
                            <option value="unknown" selected={*birth_time == BirthTime::Unknown}>
                                { "Birth hour unknown" }
                            </option>
                            { for (0..24u8).map(|h| html! {
                                <option value={format!("{h}:00")}
                                    selected={*birth_time == BirthTime::Hour(h)}>
                                    { format!("{h}:00 (precise reading)") }
                                </option>
                            }) }
                        </select>
                        <div class="choice-row">
                            { gender_button(Gender::Male, "Male") }
                            { gender_button(Gender::Female, "Female") }
                        </div>
                    </div>
                </div>

                <button type="submit" class="btn-submit">
                    { "Decode my 2026 grand fortune" }
                </button>
            </form>
        </div>
    }
}
