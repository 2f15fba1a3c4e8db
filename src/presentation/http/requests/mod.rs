use poem_openapi::Object;

/// Body of `POST /api/users`. Missing fields read as empty so the presence check
/// reports them; unknown fields such as `id` or `created_at` are ignored.
#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    #[oai(default)]
    pub name: String,
    #[oai(default)]
    pub email: String,
}
