use leptos::Owner;

/// Runs `f` under an owner captured earlier, typically before handing work to
/// a timer or an async task. If the owner has been disposed in the meantime
/// (the page was left), logs and returns None. Without a captured owner `f`
/// runs as is.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        return Some(f());
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            leptos::logging::log!("[OWNER] Owner disposed before {}", log_context);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::*;

    #[test]
    fn work_is_skipped_once_the_owner_is_gone() {
        let runtime = create_runtime();
        let mount = as_child_of_current_owner(|_: ()| {
            let (pending, set_pending) = create_signal(Some(3_i64));
            let on_created = Callback::new(move |id: i64| set_pending.set(Some(id)));
            (Owner::current(), pending, on_created)
        });
        let ((owner, pending, on_created), disposer) = mount(());

        let resumed = with_owner_safe(owner, "created", || {
            on_created.call(7);
            pending.get_untracked()
        });
        assert_eq!(resumed, Some(Some(7)));

        // Leaving the page disposes everything the component owned.
        drop(disposer);
        let resumed = with_owner_safe(owner, "created", || {
            on_created.call(8);
            pending.get_untracked()
        });
        assert_eq!(resumed, None);

        runtime.dispose();
    }

    #[test]
    fn without_an_owner_the_work_runs() {
        assert_eq!(with_owner_safe(None, "detached", || 5), Some(5));
    }
}
