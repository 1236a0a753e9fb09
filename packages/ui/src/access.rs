//! Route access policy.
//!
//! Pure: the router layouts in the binary feed it the route's [`Access`]
//! class and the current [`Viewer`] and act on the [`Decision`].

use store::Role;

/// Who is looking at the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewer {
    /// The stored token is still being verified.
    Verifying,
    Anonymous,
    SignedIn(Role),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, always.
    Public,
    /// Farmer login and signup: signed-in users go to their dashboard.
    Guest,
    /// Admin login: signed-in users go to the admin dashboard.
    GuestAdmin,
    Authenticated,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    Loading,
    Redirect(&'static str),
}

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

pub fn decide(access: Access, viewer: Viewer) -> Decision {
    match (access, viewer) {
        (Access::Public, _) => Decision::Render,
        (_, Viewer::Verifying) => Decision::Loading,

        (Access::Guest, Viewer::Anonymous) | (Access::GuestAdmin, Viewer::Anonymous) => {
            Decision::Render
        }
        (Access::Guest, Viewer::SignedIn(_)) => Decision::Redirect(DASHBOARD_PATH),
        (Access::GuestAdmin, Viewer::SignedIn(_)) => Decision::Redirect(ADMIN_DASHBOARD_PATH),

        (Access::Authenticated, Viewer::SignedIn(_)) => Decision::Render,
        (Access::Admin, Viewer::SignedIn(Role::Admin)) => Decision::Render,
        (Access::Authenticated, Viewer::Anonymous)
        | (Access::Admin, Viewer::Anonymous)
        | (Access::Admin, Viewer::SignedIn(Role::User)) => Decision::Redirect(LOGIN_PATH),
    }
}

/// Where a sign-in form sends the user once it succeeds.
///
/// Depends on which form was used, not on the role the backend reports, so an
/// admin signing in through the farmer login lands on the farmer dashboard.
pub fn after_sign_in(form: Access) -> &'static str {
    match form {
        Access::GuestAdmin => ADMIN_DASHBOARD_PATH,
        _ => DASHBOARD_PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FARMER: Viewer = Viewer::SignedIn(Role::User);
    const ADMIN: Viewer = Viewer::SignedIn(Role::Admin);

    #[test]
    fn farmer_cannot_open_admin_pages() {
        assert_eq!(decide(Access::Admin, FARMER), Decision::Redirect("/login"));
        assert_eq!(decide(Access::Admin, Viewer::Anonymous), Decision::Redirect("/login"));
        assert_eq!(decide(Access::Admin, ADMIN), Decision::Render);
    }

    #[test]
    fn protected_pages_need_a_session() {
        assert_eq!(decide(Access::Authenticated, Viewer::Anonymous), Decision::Redirect("/login"));
        assert_eq!(decide(Access::Authenticated, FARMER), Decision::Render);
        assert_eq!(decide(Access::Authenticated, ADMIN), Decision::Render);
    }

    #[test]
    fn login_pages_bounce_signed_in_users() {
        assert_eq!(decide(Access::Guest, FARMER), Decision::Redirect("/dashboard"));
        assert_eq!(decide(Access::GuestAdmin, ADMIN), Decision::Redirect("/admin/dashboard"));
        assert_eq!(decide(Access::Guest, Viewer::Anonymous), Decision::Render);
    }

    #[test]
    fn nothing_redirects_while_verifying() {
        for access in [Access::Guest, Access::GuestAdmin, Access::Authenticated, Access::Admin] {
            assert_eq!(decide(access, Viewer::Verifying), Decision::Loading);
        }
        assert_eq!(decide(Access::Public, Viewer::Verifying), Decision::Render);
    }

    #[test]
    fn sign_in_lands_where_the_login_page_would_bounce() {
        assert_eq!(after_sign_in(Access::Guest), "/dashboard");
        assert_eq!(after_sign_in(Access::GuestAdmin), "/admin/dashboard");
        for viewer in [FARMER, ADMIN] {
            for form in [Access::Guest, Access::GuestAdmin] {
                assert_eq!(decide(form, viewer), Decision::Redirect(after_sign_in(form)));
            }
        }
    }
}
