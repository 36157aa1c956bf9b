use dashboard_core::{Trigger, TriggerBinding};

const PRELUDE: &str = r#"
const SESSION = document.body.dataset.session;
function showOutput(html) {
    const out = document.getElementById('output');
    out.innerHTML = html;
    out.scrollIntoView({ behavior: 'smooth', block: 'nearest' });
}
function closeOutput() {
    document.getElementById('output').innerHTML = '';
}
function fireTrigger(name, body) {
    return fetch('/bridge/' + name + '?session=' + encodeURIComponent(SESSION), {
        method: 'POST',
        headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
        body: body || ''
    })
        .then(function (res) { return res.json(); })
        .then(function (res) { showOutput(res.html); })
        .catch(function () {
            showOutput('<div class="notice notice-error" role="alert">The dashboard could not be reached. Please reload the page.</div>');
        });
}
function submitForm(form, name) {
    if (form.reportValidity()) {
        fireTrigger(name, new URLSearchParams(new FormData(form)).toString());
    }
    return false;
}
function toggleDarkMode() {
    const root = document.documentElement;
    const next = root.getAttribute('data-theme') === 'dark' ? 'light' : 'dark';
    root.setAttribute('data-theme', next);
    document.body.classList.toggle('dark-mode', next === 'dark');
    navigator.sendBeacon('/theme?session=' + encodeURIComponent(SESSION));
}
"#;

/// Client functions for every bridge trigger, followed by the shared helpers they call.
pub(crate) fn client_script() -> String {
    let mut script = String::from(PRELUDE);
    for trigger in Trigger::ALL {
        let line = match trigger.binding() {
            TriggerBinding::Navigation(_) => format!(
                "function {}() {{ fireTrigger('{}'); }}\n",
                trigger.js_function(),
                trigger.name()
            ),
            TriggerBinding::ParseVideo | TriggerBinding::OptionHandler => format!(
                "function {}(form) {{ return submitForm(form, '{}'); }}\n",
                trigger.js_function(),
                trigger.name()
            ),
        };
        script.push_str(&line);
    }
    script
}
