mod verify_credentials;
