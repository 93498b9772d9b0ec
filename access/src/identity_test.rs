use super::*;

#[test]
fn deserializes_backend_payload_with_aliases() {
    let user: UserIdentity = serde_json::from_value(serde_json::json!({
        "_id": "64f1",
        "displayName": "Dr. Grey",
        "email": "grey@clinic.test",
        "role": "Doctor",
        "doctorId": "doc-9"
    }))
    .unwrap();

    assert_eq!(user.id, "64f1");
    assert_eq!(user.name, "Dr. Grey");
    assert_eq!(user.role, "Doctor");
    assert_eq!(user.profile_id.as_deref(), Some("doc-9"));
}

#[test]
fn role_is_kept_verbatim_but_compared_normalized() {
    let user: UserIdentity = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Sam",
        "role": "Lab-Technician"
    }))
    .unwrap();

    assert_eq!(user.role, "Lab-Technician");
    assert_eq!(user.normalized_role(), "lab_technician");
    assert_eq!(user.role_kind(), Some(Role::LabTechnician));
    assert_eq!(user.email, "");
    assert_eq!(user.profile_id, None);
}

#[test]
fn unknown_role_has_no_kind() {
    let user = UserIdentity {
        id: "u-2".to_owned(),
        name: "Pat".to_owned(),
        email: "pat@clinic.test".to_owned(),
        role: "janitor".to_owned(),
        profile_id: None,
    };
    assert_eq!(user.role_kind(), None);
    assert!(user.is_valid());
}

#[test]
fn blank_id_or_role_is_invalid() {
    let mut user = UserIdentity {
        id: " ".to_owned(),
        name: "X".to_owned(),
        email: String::new(),
        role: "nurse".to_owned(),
        profile_id: None,
    };
    assert!(!user.is_valid());
    user.id = "u-3".to_owned();
    user.role = String::new();
    assert!(!user.is_valid());
}

#[test]
fn serializes_profile_id_in_camel_case() {
    let user = UserIdentity {
        id: "u-4".to_owned(),
        name: "Kim".to_owned(),
        email: "kim@clinic.test".to_owned(),
        role: "patient".to_owned(),
        profile_id: Some("pat-1".to_owned()),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["profileId"], "pat-1");
}

#[test]
fn duplicate_id_spellings_decode() {
    let user: UserIdentity = serde_json::from_str(
        r#"{"_id":"66a1","id":"66a1","name":"Ann","fullName":"Ann Lee","email":"a@x.io","role":"Doctor","doctorId":"d-1","profileId":"p-1"}"#,
    )
    .unwrap();

    assert_eq!(user.id, "66a1");
    assert_eq!(user.name, "Ann");
    assert_eq!(user.profile_id.as_deref(), Some("p-1"));
    assert!(user.is_valid());
}

#[test]
fn me_envelope_with_both_ids_yields_identity() {
    let resp: crate::wire::MeResponse = serde_json::from_str(
        r#"{"success":true,"message":"ok","data":{"user":{"_id":"66a1","id":"66a1","name":"Ann","email":"a@x.io","role":"Doctor"}}}"#,
    )
    .unwrap();

    let user = resp.into_identity().unwrap();
    assert_eq!(user.id, "66a1");
    assert_eq!(user.role_kind(), Some(Role::Doctor));
}

#[test]
fn missing_id_decodes_as_invalid() {
    let user: UserIdentity = serde_json::from_str(r#"{"name":"Ghost","role":"nurse"}"#).unwrap();
    assert!(!user.is_valid());
}
