use crate::{NewUser, User};

#[test]
fn test_new_user_keeps_password_verbatim() {
    let user = NewUser::new(" foo@bar.com ", " Mallory", "Culbert ", " pass ").unwrap();

    assert_eq!(user.email, "foo@bar.com");
    assert_eq!(user.first_name, "Mallory");
    assert_eq!(user.last_name, "Culbert");
    assert_eq!(user.password, " pass ");
}

#[test]
fn test_new_user_rejects_email_without_at_sign() {
    let err = NewUser::new("not-an-email", "Mallory", "Culbert", "pass").unwrap_err();

    assert_eq!(err.field(), "email");
}

#[test]
fn test_new_user_rejects_empty_password() {
    let err = NewUser::new("foo@bar.com", "Mallory", "Culbert", "").unwrap_err();

    assert_eq!(err.field(), "password");
}

#[test]
fn test_user_from_new() {
    let draft = NewUser::new("foo@bar.com", "Mallory", "Culbert", "pass").unwrap();
    let user = User::from_new(7, draft);

    assert_eq!(user.user_id, 7);
    assert_eq!(user.email, "foo@bar.com");
    assert_eq!(user.password, "pass");
}
