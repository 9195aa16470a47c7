use crate::model::{WeekDay, WeekDaySelection, WEEK_DAY_OPTIONS};
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for WeekDaySelection {
    type Action = WeekDay;

    fn reduce(self: Rc<Self>, day: WeekDay) -> Rc<Self> {
        Rc::new(self.toggled(day))
    }
}

#[derive(Properties, PartialEq)]
pub struct WeekDayToggleGroupProps {
    pub selection: WeekDaySelection,
    /// Emits the clicked day; the owner toggles it in its selection
    pub on_toggle: Callback<WeekDay>,
}

/// Multi-select picker with one button per weekday.
#[function_component(WeekDayToggleGroup)]
pub fn week_day_toggle_group(props: &WeekDayToggleGroupProps) -> Html {
    html! {
        <div class="duo-week-days" role="group">
            {for WEEK_DAY_OPTIONS.iter().filter_map(|option| {
                let day = match option.day() {
                    Ok(day) => day,
                    Err(err) => {
                        log::error!("Skipping week day option: {}", err);
                        return None;
                    }
                };
                let selected = props.selection.contains(day);

                let onclick = {
                    let on_toggle = props.on_toggle.clone();
                    Callback::from(move |_: MouseEvent| on_toggle.emit(day))
                };

                Some(html! {
                    <button
                        type="button"
                        key={option.value}
                        value={option.value}
                        title={option.full_label}
                        aria-pressed={selected.to_string()}
                        class={classes!(
                            "duo-week-days__item",
                            selected.then_some("duo-week-days__item--selected")
                        )}
                        {onclick}
                    >
                        {option.short_label}
                    </button>
                })
            })}
        </div>
    }
}
