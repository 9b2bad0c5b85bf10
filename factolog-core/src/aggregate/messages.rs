use crate::grammar::Sanction;

pub(crate) fn presence(actor: &str, online: bool) -> String {
    if online {
        format!("{actor} has logged in")
    } else {
        format!("{actor} has logged out")
    }
}

pub(crate) fn kicked(actor: &str, sanction: &Sanction) -> String {
    format!("{actor} was kicked by {}", sanction.issuer)
}

pub(crate) fn banned(actor: &str, sanction: &Sanction) -> String {
    format!("{actor} was banned by {}", sanction.issuer)
}

pub(crate) fn commanded(actor: &str, command: &str) -> String {
    format!("{actor} commanded {command}")
}

pub(crate) fn said(actor: &str, message: &str) -> String {
    format!("{actor} said {message}")
}
