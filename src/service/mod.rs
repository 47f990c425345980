/// Request/response front end returning base64 GIF bodies.
pub mod handler;
