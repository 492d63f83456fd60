use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthStage {
    Form,
    Processing,
    Done,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AuthModalProps {
    /// Fired once the simulated sign-in completes.
    pub on_authed: Callback<()>,
    pub on_close: Callback<()>,
}

/// Simulated member sign-in: a short processing pause, a success flash,
/// then the modal closes itself.
#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let stage = use_state(|| AuthStage::Form);

    {
        let stage = stage.clone();
        let on_authed = props.on_authed.clone();
        let on_close = props.on_close.clone();
        use_effect_with(*stage, move |current| {
            let timeout = match current {
                AuthStage::Processing => Some(Timeout::new(1_500, move || {
                    on_authed.emit(());
                    stage.set(AuthStage::Done);
                })),
                AuthStage::Done => Some(Timeout::new(1_200, move || on_close.emit(()))),
                AuthStage::Form => None,
            };
            move || drop(timeout)
        });
    }

    let on_submit = {
        let stage = stage.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            stage.set(AuthStage::Processing);
        })
    };
    let on_close = {
        let on = props.on_close.clone();
        Callback::from(move |_| on.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal auth-modal">
                { match *stage {
                    AuthStage::Form => html! {
                        <form onsubmit={on_submit}>
                            <h4>{ "Member sign-in" }</h4>
                            <p class="auth-copy">
                                { "Members can save their lucky records and revisit them any time." }
                            </p>
                            <button type="submit" class="btn-primary">{ "Sign in" }</button>
                            <button type="button" class="btn-ghost" onclick={on_close}>{ "Close" }</button>
                        </form>
                    },
                    AuthStage::Processing => html! {
                        <p class="auth-processing">{ "Signing you in..." }</p>
                    },
                    AuthStage::Done => html! {
                        <p class="auth-success">{ "Welcome back! Your luck is now being recorded." }</p>
                    },
                } }
            </div>
        </div>
    }
}
