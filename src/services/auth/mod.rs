/*!
 * Access-token verification.
 *
 * Responsibility:
 * - Decide whether a presented bearer token is currently valid
 * - Expose the verified claim set (subject, role) to middleware/handlers
 *
 * Public API:
 * - AuthService
 * - AccessTokenClaims
 * - Role
 * - bearer_token
 */

mod access_jwt;

pub use access_jwt::{AccessTokenClaims, AuthService, Role, bearer_token};
