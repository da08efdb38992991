use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ContactField, ContactFields, ContactForm, ContactSurface};

#[derive(Clone, Default)]
struct FormRefs {
    form: NodeRef,
    name: NodeRef,
    email: NodeRef,
    message: NodeRef,
}

impl FormRefs {
    fn input_value(node: &NodeRef) -> String {
        node.cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn field_node(&self, field: ContactField) -> &NodeRef {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

impl ContactSurface for FormRefs {
    fn read_fields(&self) -> ContactFields {
        let message = self
            .message
            .cast::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default();

        ContactFields::new(
            &Self::input_value(&self.name),
            &Self::input_value(&self.email),
            &message,
        )
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn focus(&self, field: ContactField) {
        if let Some(element) = self.field_node(field).cast::<HtmlElement>() {
            let _ = element.focus();
        }
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let refs = use_memo((), |_| FormRefs::default());

    let onsubmit = {
        let refs = refs.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            ContactForm::new((*refs).clone()).handle_submit();
        })
    };

    html! {
        <form id="contact-form" class="contact-form" ref={refs.form.clone()} {onsubmit} novalidate={true}>
            <div class="form-group">
                <label for={ContactField::Name.id()}>{"Name"}</label>
                <input id={ContactField::Name.id()} name="name" type="text" ref={refs.name.clone()} />
            </div>
            <div class="form-group">
                <label for={ContactField::Email.id()}>{"Email"}</label>
                <input id={ContactField::Email.id()} name="email" type="email" ref={refs.email.clone()} />
            </div>
            <div class="form-group">
                <label for={ContactField::Message.id()}>{"Message"}</label>
                <textarea id={ContactField::Message.id()} name="message" rows="5" ref={refs.message.clone()} />
            </div>
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}
